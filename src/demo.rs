//! The annotations walkthrough run by the `annotations-demo` binary.
//!
//! A subject type carries the type marker, one method marked to run once, one
//! marked to run three times and one marked field. The walkthrough prints:
//!
//! ```text
//! --- Annotations ---
//! Annotations is annotated!
//! hi from func()
//! func2() says hi
//! func2() says hi
//! func2() says hi
//! 6
//! ```

use std::cell::RefCell;

use crate::error::Result;
use crate::runner::AnnotationRunner;
use crate::{Annotated, annotated_methods};

/// Where transcript lines go besides the transcript itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Echo {
    Stdout,
    Silent,
}

/// Lines printed during the walkthrough.
#[derive(Debug)]
pub struct Transcript {
    echo: Echo,
    lines: RefCell<Vec<String>>,
}

impl Transcript {
    pub fn new(echo: Echo) -> Self {
        Self { echo, lines: RefCell::new(Vec::new()) }
    }

    pub fn say(&self, line: impl Into<String>) {
        let line = line.into();
        if self.echo == Echo::Stdout {
            println!("{line}");
        }
        self.lines.borrow_mut().push(line);
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines.into_inner()
    }
}

#[derive(Annotated)]
#[mark]
pub struct Annotations {
    #[mark_field]
    foo: i32,
    transcript: Transcript,
}

#[annotated_methods]
impl Annotations {
    pub fn new(transcript: Transcript) -> Self {
        Self { foo: 3, transcript }
    }

    #[mark]
    pub fn func(&self) {
        self.transcript.say("hi from func()");
    }

    #[mark_repeat(times = 3)]
    pub fn func2(&self) {
        self.transcript.say("func2() says hi");
    }

    pub fn into_transcript(self) -> Transcript {
        self.transcript
    }
}

/// Runs the walkthrough and returns its transcript.
pub fn run(echo: Echo) -> Result<Transcript> {
    let transcript = Transcript::new(echo);
    transcript.say("--- Annotations ---");

    let subject = Annotations::new(transcript);
    let runner = AnnotationRunner::new();

    if runner.check_type_marker(&subject) {
        subject.transcript.say("Annotations is annotated!");
    }

    runner.invoke_single_marked(&subject)?;
    runner.invoke_repeat_marked(&subject)?;

    for (_, value) in runner.read_marked_fields(&subject)? {
        if let Some(foo) = value.downcast_ref::<i32>() {
            subject.transcript.say((foo + 3).to_string());
        }
    }

    Ok(subject.into_transcript())
}
