// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::clock::SimulationClock;
use crate::console::Console;
use parking_sim::Facility;
use std::io::Cursor;
use time::PrimitiveDateTime;
use time::macros::datetime;

pub const START: PrimitiveDateTime = datetime!(2026-03-02 08:00:00);

/// Everything observable after a scripted console session.
pub struct ScriptRun {
    pub output: String,
    pub facility: Facility,
    pub clock: SimulationClock,
}

/// Feeds `script` to a console over a fresh facility and captures the output.
pub fn run_script(capacity: u32, script: &str) -> ScriptRun {
    let facility: Facility = Facility::new(capacity).unwrap();
    let mut output: Vec<u8> = Vec::new();

    let mut console = Console::new(
        facility,
        SimulationClock::new(START),
        Cursor::new(script.as_bytes()),
        &mut output,
    );
    console.run().unwrap();
    let facility: Facility = console.facility().clone();
    let clock: SimulationClock = *console.clock();
    drop(console);

    ScriptRun {
        output: String::from_utf8(output).unwrap(),
        facility,
        clock,
    }
}
