// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{
    io::{self, BufRead, Stderr, StdinLock, Write},
    path::Path,
};

/// Manual recovery of missing track numbers.
///
/// Blocks until the operator has responded.
pub trait TrackNumberPrompt {
    /// Ask if the track number should be entered manually.
    fn confirm_manual_entry(&mut self, output_path: &Path) -> io::Result<bool>;

    /// Read the raw track number.
    fn enter_track_number(&mut self, output_path: &Path) -> io::Result<String>;
}

/// Never asks and always declines.
#[derive(Debug, Default, Clone, Copy)]
pub struct DeclinePrompt;

impl TrackNumberPrompt for DeclinePrompt {
    fn confirm_manual_entry(&mut self, output_path: &Path) -> io::Result<bool> {
        log::debug!(
            "Declining manual entry of track number for {path}",
            path = output_path.display()
        );
        Ok(false)
    }

    fn enter_track_number(&mut self, _output_path: &Path) -> io::Result<String> {
        Ok(String::new())
    }
}

/// Line-based prompt for interactive terminals.
///
/// The end of input is treated like an empty answer.
#[derive(Debug)]
pub struct ConsolePrompt<R, W> {
    input: R,
    output: W,
}

impl<R, W> ConsolePrompt<R, W> {
    #[must_use]
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    #[must_use]
    pub fn into_inner(self) -> (R, W) {
        let Self { input, output } = self;
        (input, output)
    }
}

impl ConsolePrompt<StdinLock<'static>, Stderr> {
    /// Read answers from stdin.
    ///
    /// Questions are written to stderr. Stdout remains reserved for
    /// the results.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stderr())
    }
}

impl<R, W> ConsolePrompt<R, W>
where
    R: BufRead,
    W: Write,
{
    fn ask(&mut self, question: &str) -> io::Result<String> {
        write!(self.output, "{question}")?;
        self.output.flush()?;
        let mut answer = String::new();
        self.input.read_line(&mut answer)?;
        Ok(answer.trim().to_owned())
    }
}

impl<R, W> TrackNumberPrompt for ConsolePrompt<R, W>
where
    R: BufRead,
    W: Write,
{
    fn confirm_manual_entry(&mut self, output_path: &Path) -> io::Result<bool> {
        let answer = self.ask(&format!(
            "No track number found for {path}. Enter it manually? (y/N): ",
            path = output_path.display()
        ))?;
        Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
    }

    fn enter_track_number(&mut self, _output_path: &Path) -> io::Result<String> {
        self.ask("Track number: ")
    }
}
