//! Interactive menu
//!
//! Two stages: an account menu that repeats until a login succeeds, then the
//! main menu. Every action loads what it needs from the stores, prints, and
//! returns to the menu. Store and auth errors are printed and the session
//! continues; only a failure to read input or write output ends it.
//! End of input ends the session cleanly at any prompt.

use std::fmt;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use super::errors::{CliError, CliResult};
use super::render::{
    hospital_row, hospital_row_in_city, patient_row, AUTH_MENU, BANNER, MAIN_MENU,
};
use crate::auth::{AuthError, AuthGate};
use crate::observability::{log_event, log_event_with_fields, Event};
use crate::query::{filter_by_city, HospitalDirectory, HospitalSort};
use crate::record::{Hospital, Patient};
use crate::storage::Stores;

/// Account menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthChoice {
    Login,
    SignUp,
    Exit,
}

impl AuthChoice {
    pub fn from_number(n: i32) -> Option<Self> {
        match n {
            1 => Some(AuthChoice::Login),
            2 => Some(AuthChoice::SignUp),
            3 => Some(AuthChoice::Exit),
            _ => None,
        }
    }
}

/// Main menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddHospital,
    DisplayHospitals,
    HospitalsByCity,
    Sorted(HospitalSort),
    AddPatient,
    DisplayPatients,
    Exit,
}

impl MenuChoice {
    pub fn from_number(n: i32) -> Option<Self> {
        match n {
            1 => Some(MenuChoice::AddHospital),
            2 => Some(MenuChoice::DisplayHospitals),
            3 => Some(MenuChoice::HospitalsByCity),
            4 => Some(MenuChoice::Sorted(HospitalSort::BedPriceDescending)),
            5 => Some(MenuChoice::Sorted(HospitalSort::AvailableBedsDescending)),
            6 => Some(MenuChoice::Sorted(HospitalSort::NameAscending)),
            7 => Some(MenuChoice::Sorted(HospitalSort::RatingThenReviewsDescending)),
            8 => Some(MenuChoice::AddPatient),
            9 => Some(MenuChoice::DisplayPatients),
            10 => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Why an action stopped before finishing
enum Interrupt {
    /// A number prompt got something that is not a number
    Invalid,
    /// Input ended
    Closed,
    /// The terminal itself failed
    Io(CliError),
}

impl From<io::Error> for Interrupt {
    fn from(e: io::Error) -> Self {
        Interrupt::Io(e.into())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Menu session over any line-oriented input and output.
pub struct Shell<'a, R, W> {
    stores: &'a Stores,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(stores: &'a Stores, input: R, output: W) -> Self {
        Self {
            stores,
            input,
            output,
        }
    }

    /// Consumes the shell, returning its output sink
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs the account menu and then the main menu until exit or end of
    /// input.
    pub fn run(&mut self) -> CliResult<()> {
        log_event(Event::SessionStart);
        let result = self.session();
        log_event(Event::SessionEnd);
        result
    }

    fn session(&mut self) -> CliResult<()> {
        writeln!(self.output, "{}", BANNER)?;
        match self.authenticate()? {
            Some(_username) => self.main_loop(),
            None => Ok(()),
        }
    }

    // ==================
    // Account menu
    // ==================

    fn authenticate(&mut self) -> CliResult<Option<String>> {
        let stores = self.stores;
        let gate = AuthGate::new(&stores.users);

        loop {
            let choice = match self.ask_number::<i32>(AUTH_MENU) {
                Ok(n) => n,
                Err(interrupt) => match self.interrupted(interrupt)? {
                    Flow::Continue => continue,
                    Flow::Quit => return Ok(None),
                },
            };

            let step = match AuthChoice::from_number(choice) {
                Some(AuthChoice::Login) => self.login(&gate),
                Some(AuthChoice::SignUp) => self.signup(&gate).map(|()| None),
                Some(AuthChoice::Exit) => return Ok(None),
                None => {
                    writeln!(self.output, "Invalid choice! Try again.")?;
                    Ok(None)
                }
            };

            match step {
                Ok(Some(username)) => return Ok(Some(username)),
                Ok(None) => {}
                Err(interrupt) => {
                    if self.interrupted(interrupt)? == Flow::Quit {
                        return Ok(None);
                    }
                }
            }
        }
    }

    fn login(&mut self, gate: &AuthGate<'_>) -> Result<Option<String>, Interrupt> {
        let username = self.ask_text("Enter username: ")?;
        let password = self.ask_text("Enter password: ")?;

        match gate.login(&username, &password) {
            Ok(username) => {
                writeln!(self.output, "Login successful!")?;
                Ok(Some(username))
            }
            Err(AuthError::AuthFailure) => {
                writeln!(self.output, "Invalid username or password!")?;
                Ok(None)
            }
            Err(e) => {
                self.report(e.code(), &e)?;
                Ok(None)
            }
        }
    }

    fn signup(&mut self, gate: &AuthGate<'_>) -> Result<(), Interrupt> {
        let username = self.ask_text("Enter username: ")?;

        match gate.username_exists(&username) {
            Ok(true) => {
                writeln!(self.output, "Username already exists!")?;
                return Ok(());
            }
            Ok(false) => {}
            Err(e) => {
                self.report(e.code(), &e)?;
                return Ok(());
            }
        }

        let password = self.ask_text("Enter password: ")?;

        match gate.signup(&username, &password) {
            Ok(()) => writeln!(self.output, "Sign-up successful! You can now login.")?,
            Err(AuthError::UsernameTaken) => writeln!(self.output, "Username already exists!")?,
            Err(e) => self.report(e.code(), &e)?,
        }
        Ok(())
    }

    // ==================
    // Main menu
    // ==================

    fn main_loop(&mut self) -> CliResult<()> {
        loop {
            writeln!(self.output, "\n{}", BANNER)?;
            let number = match self.ask_number::<i32>(MAIN_MENU) {
                Ok(n) => n,
                Err(interrupt) => match self.interrupted(interrupt)? {
                    Flow::Continue => continue,
                    Flow::Quit => return Ok(()),
                },
            };

            match MenuChoice::from_number(number) {
                Some(MenuChoice::Exit) => return Ok(()),
                Some(choice) => {
                    if let Err(interrupt) = self.perform(choice) {
                        if self.interrupted(interrupt)? == Flow::Quit {
                            return Ok(());
                        }
                    }
                }
                None => writeln!(self.output, "Invalid choice! Try again.")?,
            }

            write!(self.output, "\nPress Enter to continue...")?;
            if self.read_line()?.is_none() {
                return Ok(());
            }
        }
    }

    fn perform(&mut self, choice: MenuChoice) -> Result<(), Interrupt> {
        match choice {
            MenuChoice::AddHospital => self.add_hospital(),
            MenuChoice::DisplayHospitals => self.display_hospitals(),
            MenuChoice::HospitalsByCity => self.hospitals_by_city(),
            MenuChoice::Sorted(order) => self.sorted_hospitals(order),
            MenuChoice::AddPatient => self.add_patient(),
            MenuChoice::DisplayPatients => self.display_patients(),
            MenuChoice::Exit => Ok(()),
        }
    }

    fn add_hospital(&mut self) -> Result<(), Interrupt> {
        let id = self.ask_number::<i32>("Enter Hospital ID: ")?;
        let name = self.ask_text("Enter Hospital Name: ")?;
        let city = self.ask_text("Enter City: ")?;
        let available_beds = self.ask_number::<i32>("Enter Number of Available Beds: ")?;
        let bed_price = self.ask_decimal("Enter Bed Price per Day: ")?;
        let rating = self.ask_decimal("Enter Hospital Rating (0-5): ")?;
        let reviews = self.ask_number::<i32>("Enter Number of Reviews: ")?;

        let hospital = Hospital::new(id, name, city, available_beds, bed_price, rating, reviews);
        match self.stores.hospitals.append(&hospital) {
            Ok(()) => writeln!(self.output, "Hospital added successfully!")?,
            Err(e) => self.report(e.code().code(), &e)?,
        }
        Ok(())
    }

    fn display_hospitals(&mut self) -> Result<(), Interrupt> {
        let hospitals = match self.stores.hospitals.load_all() {
            Ok(hospitals) => hospitals,
            Err(e) => return Ok(self.report(e.code().code(), &e)?),
        };

        if hospitals.is_empty() {
            writeln!(self.output, "No hospitals found!")?;
            return Ok(());
        }

        writeln!(self.output, "\n--- Hospital Records ---")?;
        for hospital in &hospitals {
            writeln!(self.output, "{}", hospital_row(hospital))?;
        }
        Ok(())
    }

    fn hospitals_by_city(&mut self) -> Result<(), Interrupt> {
        let city = self.ask_text("Enter City Name: ")?;

        let hospitals = match self.stores.hospitals.load_all() {
            Ok(hospitals) => hospitals,
            Err(e) => return Ok(self.report(e.code().code(), &e)?),
        };

        if hospitals.is_empty() {
            writeln!(self.output, "No hospitals found!")?;
            return Ok(());
        }

        let matches = filter_by_city(&hospitals, &city);
        writeln!(self.output, "\n--- Hospitals in {} ---", city)?;
        if matches.is_empty() {
            writeln!(self.output, "No hospitals found in this city.")?;
        }
        for hospital in &matches {
            writeln!(self.output, "{}", hospital_row_in_city(hospital))?;
        }
        Ok(())
    }

    fn sorted_hospitals(&mut self, order: HospitalSort) -> Result<(), Interrupt> {
        let hospitals = match self.stores.hospitals.load_all() {
            Ok(hospitals) => hospitals,
            Err(e) => return Ok(self.report(e.code().code(), &e)?),
        };

        if hospitals.is_empty() {
            writeln!(self.output, "No hospitals found!")?;
            return Ok(());
        }

        writeln!(self.output, "\n--- Hospitals Sorted by {} ---", order.title())?;
        for hospital in &order.apply(&hospitals) {
            writeln!(self.output, "{}", hospital_row(hospital))?;
        }
        Ok(())
    }

    fn add_patient(&mut self) -> Result<(), Interrupt> {
        let id = self.ask_number::<i32>("Enter Patient ID: ")?;
        let name = self.ask_text("Enter Patient Name: ")?;
        let age = self.ask_number::<i32>("Enter Patient Age: ")?;
        let disease = self.ask_text("Enter Disease/Condition: ")?;
        let hospital_id =
            self.ask_number::<i32>("Enter Hospital ID (where patient is admitted): ")?;

        let patient = Patient::new(id, name, age, disease, hospital_id);
        match self.stores.patients.append(&patient) {
            Ok(()) => writeln!(self.output, "Patient added successfully!")?,
            Err(e) => self.report(e.code().code(), &e)?,
        }
        Ok(())
    }

    fn display_patients(&mut self) -> Result<(), Interrupt> {
        let patients = match self.stores.patients.load_all() {
            Ok(patients) => patients,
            Err(e) => return Ok(self.report(e.code().code(), &e)?),
        };

        if patients.is_empty() {
            writeln!(self.output, "No patients found!")?;
            return Ok(());
        }

        let stores = self.stores;
        let directory = HospitalDirectory::new(&stores.hospitals);

        writeln!(self.output, "\n--- Patient Records ---")?;
        for view in directory.resolve_patients(patients) {
            writeln!(self.output, "{}", patient_row(&view))?;
        }
        Ok(())
    }

    // ==================
    // Prompts
    // ==================

    /// Reads one line without its terminator; `None` at end of input.
    fn read_line(&mut self) -> CliResult<Option<String>> {
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    fn ask_text(&mut self, prompt: &str) -> Result<String, Interrupt> {
        write!(self.output, "{}", prompt)?;
        self.read_line()
            .map_err(Interrupt::Io)?
            .ok_or(Interrupt::Closed)
    }

    fn ask_number<T: FromStr>(&mut self, prompt: &str) -> Result<T, Interrupt> {
        let text = self.ask_text(prompt)?;
        text.trim().parse::<T>().map_err(|_| Interrupt::Invalid)
    }

    fn ask_decimal(&mut self, prompt: &str) -> Result<f64, Interrupt> {
        let value = self.ask_number::<f64>(prompt)?;
        if value.is_finite() {
            Ok(value)
        } else {
            Err(Interrupt::Invalid)
        }
    }

    fn interrupted(&mut self, interrupt: Interrupt) -> CliResult<Flow> {
        match interrupt {
            Interrupt::Invalid => {
                writeln!(self.output, "Invalid input!")?;
                Ok(Flow::Continue)
            }
            Interrupt::Closed => Ok(Flow::Quit),
            Interrupt::Io(e) => Err(e),
        }
    }

    fn report(&mut self, code: &str, error: &dyn fmt::Display) -> io::Result<()> {
        let reason = error.to_string();
        log_event_with_fields(
            Event::ActionFailed,
            &[("code", code), ("reason", reason.as_str())],
        );
        writeln!(self.output, "Error: {}", reason)
    }
}
