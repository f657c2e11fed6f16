// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The interactive text menu.
//!
//! The console reads raw lines, validates them, turns them into
//! [`Command`]s for the facility and renders the results. It owns the
//! simulation clock; the facility never reads the time on its own.

use crate::clock::SimulationClock;
use parking_sim::{Command, CoreError, Facility, Outcome, apply};
use parking_sim_domain::{LicensePlate, Payment, Vehicle, VehicleCategory, format_timestamp};
use std::io::{self, BufRead, Write};
use tracing::debug;

const SECTION_RULE: &str = "--------------------";

/// Top-level menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Enter,
    Exit,
    Availability,
    ListParked,
    DailyReport,
    ResetDay,
    AdvanceClock,
    Quit,
}

impl MenuChoice {
    const fn from_number(number: u32) -> Option<Self> {
        match number {
            1 => Some(Self::Enter),
            2 => Some(Self::Exit),
            3 => Some(Self::Availability),
            4 => Some(Self::ListParked),
            5 => Some(Self::DailyReport),
            6 => Some(Self::ResetDay),
            7 => Some(Self::AdvanceClock),
            8 => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Drives a [`Facility`] from line-oriented input.
pub struct Console<R, W> {
    facility: Facility,
    clock: SimulationClock,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console over the given facility, clock and streams.
    pub const fn new(facility: Facility, clock: SimulationClock, input: R, output: W) -> Self {
        Self {
            facility,
            clock,
            input,
            output,
        }
    }

    /// Returns the facility being driven.
    #[must_use]
    pub const fn facility(&self) -> &Facility {
        &self.facility
    }

    /// Returns the simulation clock.
    #[must_use]
    pub const fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    /// Runs the menu loop until the user quits or the input ends.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails.
    pub fn run(&mut self) -> io::Result<()> {
        self.print_welcome()?;

        loop {
            self.print_menu()?;
            let Some(number) = self.read_number("Choose an option: ")? else {
                debug!("Input closed, leaving menu loop");
                return Ok(());
            };

            let keep_going: bool = match MenuChoice::from_number(number) {
                Some(MenuChoice::Enter) => self.handle_entry()?,
                Some(MenuChoice::Exit) => self.handle_exit()?,
                Some(MenuChoice::Availability) => {
                    self.show_availability()?;
                    true
                }
                Some(MenuChoice::ListParked) => {
                    self.list_parked()?;
                    true
                }
                Some(MenuChoice::DailyReport) => {
                    write!(self.output, "\n{}", self.facility.daily_report())?;
                    true
                }
                Some(MenuChoice::ResetDay) => {
                    self.execute(Command::ResetDay)?;
                    true
                }
                Some(MenuChoice::AdvanceClock) => self.advance_clock()?,
                Some(MenuChoice::Quit) => {
                    writeln!(self.output, "Shutting down. Goodbye!")?;
                    false
                }
                None => {
                    writeln!(self.output, "Invalid choice, please pick a listed option.")?;
                    true
                }
            };

            if !keep_going {
                return Ok(());
            }
        }
    }

    fn print_welcome(&mut self) -> io::Result<()> {
        writeln!(self.output, "====================================")?;
        writeln!(self.output, "    WELCOME TO THE PARKING SIMULATOR")?;
        writeln!(self.output, "====================================")?;
        writeln!(
            self.output,
            "Current simulation time: {}",
            format_timestamp(self.clock.now())
        )
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "\nMenu:")?;
        writeln!(self.output, "1. Register vehicle entry")?;
        writeln!(self.output, "2. Register vehicle exit")?;
        writeln!(self.output, "3. Check available spots")?;
        writeln!(self.output, "4. List parked vehicles")?;
        writeln!(self.output, "5. Generate daily report")?;
        writeln!(self.output, "6. Clear daily report (start a new day)")?;
        writeln!(self.output, "7. Advance simulation time")?;
        writeln!(self.output, "8. Quit")
    }

    /// Returns `Ok(false)` when the input ended mid-dialogue.
    fn handle_entry(&mut self) -> io::Result<bool> {
        writeln!(self.output, "\nVehicle Entry\n{SECTION_RULE}")?;

        if self.facility.is_full() {
            writeln!(self.output, "Sorry, the facility is full. No spots are available.")?;
            return Ok(true);
        }

        let Some(plate) = self.read_plate()? else {
            return Ok(false);
        };
        if self.facility.is_parked(&plate) {
            writeln!(self.output, "This vehicle is already parked.")?;
            return Ok(true);
        }

        writeln!(self.output, "Choose vehicle type:")?;
        for (position, category) in VehicleCategory::ALL.iter().enumerate() {
            writeln!(
                self.output,
                "{}. {} (rate: {:.2} per hour)",
                position + 1,
                category.label(),
                category.hourly_rate()
            )?;
        }
        let Some(number) = self.read_number("Choice: ")? else {
            return Ok(false);
        };
        let Some(category) = category_for(number) else {
            writeln!(self.output, "Invalid vehicle type.")?;
            return Ok(true);
        };

        let vehicle: Vehicle = Vehicle::new(category, plate, self.clock.now());
        self.execute(Command::Enter { vehicle })?;
        Ok(true)
    }

    fn handle_exit(&mut self) -> io::Result<bool> {
        writeln!(self.output, "\nVehicle Exit\n{SECTION_RULE}")?;

        let Some(plate) = self.read_plate()? else {
            return Ok(false);
        };
        self.execute(Command::Exit {
            plate,
            exit_time: self.clock.now(),
        })?;
        Ok(true)
    }

    fn show_availability(&mut self) -> io::Result<()> {
        writeln!(
            self.output,
            "Available spots: {} of {}",
            self.facility.available_count(),
            self.facility.capacity()
        )
    }

    fn list_parked(&mut self) -> io::Result<()> {
        writeln!(self.output, "\nCurrently Parked Vehicles\n{SECTION_RULE}")?;

        let mut any: bool = false;
        for occupied in self.facility.list_occupied() {
            writeln!(self.output, "{occupied}")?;
            any = true;
        }
        if !any {
            writeln!(self.output, "The facility is empty.")?;
        }
        Ok(())
    }

    /// Returns `Ok(false)` when the input ended mid-dialogue.
    fn advance_clock(&mut self) -> io::Result<bool> {
        writeln!(self.output, "\nAdvance Simulation Time\n{SECTION_RULE}")?;
        writeln!(
            self.output,
            "Current simulation time: {}",
            format_timestamp(self.clock.now())
        )?;

        let Some(hours) = self.read_number("Hours to advance: ")? else {
            return Ok(false);
        };
        let Some(minutes) = self.read_number("Minutes to advance: ")? else {
            return Ok(false);
        };

        let now = self.clock.advance(hours, minutes);
        debug!(hours, minutes, now = %format_timestamp(now), "Simulation clock advanced");
        writeln!(
            self.output,
            "Simulation time advanced to: {}",
            format_timestamp(now)
        )?;
        Ok(true)
    }

    fn execute(&mut self, command: Command) -> io::Result<()> {
        match apply(&mut self.facility, command) {
            Ok(outcome) => self.render_outcome(&outcome),
            Err(CoreError::VehicleNotFound { plate }) => writeln!(
                self.output,
                "Vehicle with plate '{plate}' was not found in the facility."
            ),
            Err(err) => writeln!(self.output, "Request rejected: {err}"),
        }
    }

    fn render_outcome(&mut self, outcome: &Outcome) -> io::Result<()> {
        match outcome {
            Outcome::Parked { spot } => writeln!(
                self.output,
                "Vehicle parked in spot {spot} at {}",
                format_timestamp(self.clock.now())
            ),
            Outcome::Departed(payment) => self.render_payment(payment),
            Outcome::DayReset { .. } => {
                writeln!(self.output, "Daily report cleared. A new day has started.")
            }
        }
    }

    fn render_payment(&mut self, payment: &Payment) -> io::Result<()> {
        let session = &payment.session;
        writeln!(self.output, "Vehicle exited successfully.")?;
        writeln!(self.output, "Type: {}", session.vehicle_type())?;
        writeln!(
            self.output,
            "Entry time: {}",
            format_timestamp(session.entry_time())
        )?;
        writeln!(
            self.output,
            "Exit time: {}",
            format_timestamp(session.exit_time())
        )?;
        writeln!(self.output, "Billed hours: {}", payment.billed_hours)?;
        writeln!(self.output, "Amount due: {:.2}", payment.fee)
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line: String = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Prompts until a non-negative integer is entered.
    fn read_number(&mut self, prompt: &str) -> io::Result<Option<u32>> {
        loop {
            let Some(line) = self.read_line(prompt)? else {
                return Ok(None);
            };
            match line.parse::<i64>() {
                Ok(value) => match u32::try_from(value) {
                    Ok(number) => return Ok(Some(number)),
                    Err(_) if value < 0 => {
                        writeln!(self.output, "Please enter a non-negative integer.")?;
                    }
                    Err(_) => writeln!(self.output, "That number is too large.")?,
                },
                Err(_) => writeln!(self.output, "Invalid input, please enter an integer.")?,
            }
        }
    }

    /// Prompts until a non-empty plate is entered.
    fn read_plate(&mut self) -> io::Result<Option<LicensePlate>> {
        loop {
            let Some(line) = self.read_line("Enter license plate: ")? else {
                return Ok(None);
            };
            match LicensePlate::new(&line) {
                Ok(plate) => return Ok(Some(plate)),
                Err(_) => writeln!(self.output, "Input cannot be empty, please try again.")?,
            }
        }
    }
}

/// Maps a 1-based menu number onto a vehicle category.
fn category_for(number: u32) -> Option<VehicleCategory> {
    let index: usize = usize::try_from(number.checked_sub(1)?).ok()?;
    VehicleCategory::ALL.get(index).copied()
}
