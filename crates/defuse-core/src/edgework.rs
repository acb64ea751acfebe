//! Edgework: the externally-visible features of the bomb plus the session
//! counters.
//!
//! One [`Edgework`] exists per bomb, owned by the coordinator. Solvers
//! declare which fields they will read ([`Edgework::require`]) while the
//! queue is assembled; the coordinator then runs the one-time acquisition
//! pass ([`Edgework::acquire`]) which prompts the operator for exactly the
//! fields something needs. After acquisition only the strike and solve
//! counters change, and only through [`Edgework::register_strike`] /
//! [`Edgework::register_solve`] -- incrementing past a known strike limit is
//! the detonation condition.

use std::ops::{BitOr, BitOrAssign};

use crate::console::Console;
use crate::error::SolveError;

// ---------------------------------------------------------------------------
// Ports
// ---------------------------------------------------------------------------

/// Port kinds that can appear on a bomb's port plates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Port {
    Dvid,
    Parallel,
    Ps2,
    Rj45,
    Serial,
    Rca,
}

impl Port {
    /// Every port kind, in canonical order.
    pub const ALL: [Port; 6] = [
        Port::Dvid,
        Port::Parallel,
        Port::Ps2,
        Port::Rj45,
        Port::Serial,
        Port::Rca,
    ];

    /// The lowercase name used in operator prompts.
    pub fn name(self) -> &'static str {
        match self {
            Port::Dvid => "dvid",
            Port::Parallel => "parallel",
            Port::Ps2 => "ps2",
            Port::Rj45 => "rj45",
            Port::Serial => "serial",
            Port::Rca => "rca",
        }
    }

    /// Parse an operator-supplied name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Port> {
        Port::ALL
            .into_iter()
            .find(|port| port.name().eq_ignore_ascii_case(name))
    }
}

// ---------------------------------------------------------------------------
// Requirement flags
// ---------------------------------------------------------------------------

/// Bitset of edgework fields a solver needs to read.
///
/// Accumulated into [`Edgework`] as solvers are queued; acquisition only
/// prompts for fields whose flag is present. `TOTAL_MODULES`, `STRIKES`, and
/// `SOLVES` are always populated by the coordinator -- their flags exist so a
/// solver can still declare every field it touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EdgeFlags(u16);

impl EdgeFlags {
    pub const NONE: EdgeFlags = EdgeFlags(0);
    pub const START_TIME: EdgeFlags = EdgeFlags(1 << 0);
    pub const MAX_STRIKES: EdgeFlags = EdgeFlags(1 << 1);
    pub const BATTERIES: EdgeFlags = EdgeFlags(1 << 2);
    pub const INDICATORS: EdgeFlags = EdgeFlags(1 << 3);
    pub const SERIAL: EdgeFlags = EdgeFlags(1 << 4);
    pub const PORTS: EdgeFlags = EdgeFlags(1 << 5);
    // Always populated; declarable for completeness.
    pub const TOTAL_MODULES: EdgeFlags = EdgeFlags(1 << 6);
    pub const STRIKES: EdgeFlags = EdgeFlags(1 << 7);
    pub const SOLVES: EdgeFlags = EdgeFlags(1 << 8);

    /// Whether every flag in `other` is present in `self`.
    pub fn contains(self, other: EdgeFlags) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for EdgeFlags {
    type Output = EdgeFlags;

    fn bitor(self, rhs: EdgeFlags) -> EdgeFlags {
        EdgeFlags(self.0 | rhs.0)
    }
}

impl BitOrAssign for EdgeFlags {
    fn bitor_assign(&mut self, rhs: EdgeFlags) {
        self.0 |= rhs.0;
    }
}

// ---------------------------------------------------------------------------
// Indicators
// ---------------------------------------------------------------------------

/// A labeled indicator light. The label is stored lowercase; `lit` records
/// whether the light is on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Indicator {
    pub label: String,
    pub lit: bool,
}

impl Indicator {
    pub fn new(label: impl Into<String>, lit: bool) -> Self {
        Self {
            label: label.into().to_lowercase(),
            lit,
        }
    }
}

// ---------------------------------------------------------------------------
// Acquisition overrides
// ---------------------------------------------------------------------------

/// Known-in-advance edgework values, supplied by the caller of
/// [`Edgework::acquire`] (typically from a mission definition).
///
/// A `Some` field suppresses the corresponding operator prompt; values are
/// clamped to the edgework invariants on the way in. An invalid serial
/// override is ignored and falls through to prompting.
#[derive(Debug, Clone, Default)]
pub struct EdgeworkReport {
    pub start_time_mins: Option<u32>,
    pub total_modules: Option<u32>,
    pub max_strikes: Option<u32>,
    pub batteries: Option<u32>,
    pub indicators: Option<Vec<Indicator>>,
    pub port_plates: Option<Vec<Vec<Port>>>,
    pub serial: Option<String>,
    pub strikes: Option<u32>,
    pub solves: Option<u32>,
}

// ---------------------------------------------------------------------------
// Edgework
// ---------------------------------------------------------------------------

/// Edgework information and bomb metadata for one defusal session.
#[derive(Debug, Default)]
pub struct Edgework {
    start_time_mins: Option<u32>,
    total_modules: u32,
    max_strikes: Option<u32>,
    batteries: u32,
    indicators: Vec<Indicator>,
    serial: String,
    port_plates: Vec<Vec<Port>>,
    strikes: u32,
    solves: u32,
    needs: EdgeFlags,
}

impl Edgework {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the given kinds of edgework as needed for this bomb. Monotonic;
    /// may be called any number of times.
    pub fn require(&mut self, flags: EdgeFlags) {
        self.needs |= flags;
    }

    /// One-time population pass. For each field: a valid override in
    /// `report` wins; otherwise the operator is prompted iff the field was
    /// declared needed; otherwise the default stands. Call exactly once,
    /// after every solver has declared its needs and before any solver runs.
    pub fn acquire(
        &mut self,
        console: &mut dyn Console,
        report: EdgeworkReport,
    ) -> Result<(), SolveError> {
        self.acquire_start_time(console, report.start_time_mins)?;
        self.set_total_modules(report.total_modules);
        self.acquire_max_strikes(console, report.max_strikes)?;
        self.acquire_batteries(console, report.batteries)?;
        self.acquire_indicators(console, report.indicators)?;
        self.acquire_ports(console, report.port_plates)?;
        self.acquire_serial(console, report.serial)?;
        self.set_strikes(report.strikes);
        self.set_solves(report.solves);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Counters
    // -----------------------------------------------------------------------

    /// Record a strike. Reaching a known strike limit detonates the bomb:
    /// the returned [`SolveError::Detonated`] propagates up and ends the
    /// session.
    pub fn register_strike(&mut self) -> Result<(), SolveError> {
        self.strikes += 1;
        tracing::debug!(strikes = self.strikes, "strike recorded");
        if self.strike_limit_reached() {
            return Err(SolveError::Detonated {
                strikes: self.strikes,
            });
        }
        Ok(())
    }

    /// Record a solve. Clamped so `solves` never exceeds `total_modules`.
    pub fn register_solve(&mut self) {
        self.solves = (self.solves + 1).min(self.total_modules);
        tracing::debug!(solves = self.solves, total = self.total_modules, "solve recorded");
    }

    // -----------------------------------------------------------------------
    // Reads
    // -----------------------------------------------------------------------

    /// Starting timer value in minutes, if known.
    pub fn start_time_mins(&self) -> Option<u32> {
        self.start_time_mins
    }

    pub fn total_modules(&self) -> u32 {
        self.total_modules
    }

    /// The strike limit, if known. `None` means unlimited.
    pub fn max_strikes(&self) -> Option<u32> {
        self.max_strikes
    }

    pub fn batteries(&self) -> u32 {
        self.batteries
    }

    pub fn indicators(&self) -> &[Indicator] {
        &self.indicators
    }

    /// The serial number, lowercase. Empty until acquired.
    pub fn serial(&self) -> &str {
        &self.serial
    }

    pub fn port_plates(&self) -> &[Vec<Port>] {
        &self.port_plates
    }

    pub fn strikes(&self) -> u32 {
        self.strikes
    }

    pub fn solves(&self) -> u32 {
        self.solves
    }

    /// Whether the bomb has hit or breached a known strike limit.
    pub fn strike_limit_reached(&self) -> bool {
        match self.max_strikes {
            Some(limit) => self.strikes >= limit,
            None => false,
        }
    }

    /// Whether the bomb has been defused (every present module solved).
    pub fn defused(&self) -> bool {
        self.solves >= self.total_modules
    }

    /// Whether the last digit of the serial number is odd. False while the
    /// serial is unset.
    pub fn serial_last_digit_odd(&self) -> bool {
        self.serial
            .chars()
            .filter(char::is_ascii_digit)
            .next_back()
            .and_then(|c| c.to_digit(10))
            .is_some_and(|d| d % 2 == 1)
    }

    /// Whether the serial number contains a vowel. False while unset.
    pub fn serial_contains_vowel(&self) -> bool {
        self.serial.chars().any(|c| "aeiou".contains(c))
    }

    /// First digit of the serial number, left to right. `None` while unset.
    pub fn serial_first_digit(&self) -> Option<char> {
        self.serial.chars().find(char::is_ascii_digit)
    }

    /// First letter of the serial number, left to right. `None` while unset.
    pub fn serial_first_letter(&self) -> Option<char> {
        self.serial.chars().find(char::is_ascii_alphabetic)
    }

    /// Whether the bomb has the given indicator in the given lit state.
    pub fn has_indicator(&self, label: &str, lit: bool) -> bool {
        let label = label.to_lowercase();
        self.indicators
            .iter()
            .any(|ind| ind.label == label && ind.lit == lit)
    }

    /// Whether any port plate carries the given port.
    pub fn has_port(&self, port: Port) -> bool {
        self.port_plates.iter().any(|plate| plate.contains(&port))
    }

    // -----------------------------------------------------------------------
    // Acquisition helpers
    // -----------------------------------------------------------------------

    fn acquire_start_time(
        &mut self,
        console: &mut dyn Console,
        known: Option<u32>,
    ) -> Result<(), SolveError> {
        if let Some(mins) = known.filter(|&m| m > 0) {
            self.start_time_mins = Some(mins);
        } else if self.needs.contains(EdgeFlags::START_TIME) {
            console.emit("What is the starting time on the bomb, in minutes?");
            console.emit("(In Zen mode, this is the time the bomb was generated with.)");
            self.start_time_mins = Some(console.positive_int()?);
        }
        Ok(())
    }

    fn set_total_modules(&mut self, known: Option<u32>) {
        if let Some(total) = known {
            self.total_modules = total;
        }
    }

    fn acquire_max_strikes(
        &mut self,
        console: &mut dyn Console,
        known: Option<u32>,
    ) -> Result<(), SolveError> {
        if let Some(limit) = known.filter(|&n| n > 0) {
            self.max_strikes = Some(limit);
        } else if self.needs.contains(EdgeFlags::MAX_STRIKES) {
            console.emit("How many strikes will cause the bomb to detonate?");
            self.max_strikes = Some(console.positive_int()?);
        }
        Ok(())
    }

    fn acquire_batteries(
        &mut self,
        console: &mut dyn Console,
        known: Option<u32>,
    ) -> Result<(), SolveError> {
        if let Some(count) = known {
            self.batteries = count;
        } else if self.needs.contains(EdgeFlags::BATTERIES) {
            console.emit("How many batteries are on the bomb?");
            let answer = console.string_matching(
                &|s| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit()),
                false,
            )?;
            self.batteries = answer.parse().unwrap_or(0);
        }
        Ok(())
    }

    fn acquire_indicators(
        &mut self,
        console: &mut dyn Console,
        known: Option<Vec<Indicator>>,
    ) -> Result<(), SolveError> {
        if let Some(indicators) = known {
            self.indicators = indicators;
        } else if self.needs.contains(EdgeFlags::INDICATORS)
            && console.yes_no("Are there any indicators?")?
        {
            console.emit("Input each indicator, one per line.");
            console.emit("Lowercase means unlit and uppercase means lit,");
            console.emit("so \"CAR\" is a lit CAR, and \"frk\" is an unlit FRK.");
            let raw = console.strings_matching(&indicator_text_valid, true, 0)?;
            self.indicators = raw
                .iter()
                .map(|text| Indicator::new(text.as_str(), text.chars().all(char::is_uppercase)))
                .collect();
        }
        // otherwise, the default of no indicators stands
        Ok(())
    }

    fn acquire_ports(
        &mut self,
        console: &mut dyn Console,
        known: Option<Vec<Vec<Port>>>,
    ) -> Result<(), SolveError> {
        if let Some(plates) = known {
            self.port_plates = plates;
        } else if self.needs.contains(EdgeFlags::PORTS)
            && console.yes_no("Are there any port plates?")?
        {
            let names: Vec<&str> = Port::ALL.iter().map(|port| port.name()).collect();
            console.emit("How many port plates are there?");
            let plate_count = console.positive_int()?;
            for plate_id in 1..=plate_count {
                console.emit(&format!("What ports, if any, are on plate {plate_id}?"));
                let plate = console.strings_from_set(&names, false, true, 0)?;
                self.port_plates.push(
                    plate
                        .iter()
                        .filter_map(|name| Port::from_name(name))
                        .collect(),
                );
            }
        }
        // otherwise, the default of no plates stands
        Ok(())
    }

    fn acquire_serial(
        &mut self,
        console: &mut dyn Console,
        known: Option<String>,
    ) -> Result<(), SolveError> {
        if let Some(serial) = known.filter(|s| serial_valid(s)) {
            self.serial = serial.to_lowercase();
        } else if self.needs.contains(EdgeFlags::SERIAL) {
            console.emit("What is the serial number?");
            self.serial = console.string_matching(&serial_valid, false)?;
        }
        Ok(())
    }

    fn set_strikes(&mut self, known: Option<u32>) {
        if let Some(strikes) = known {
            self.strikes = match self.max_strikes {
                Some(limit) => strikes.min(limit),
                None => strikes,
            };
        }
    }

    fn set_solves(&mut self, known: Option<u32>) {
        if let Some(solves) = known {
            self.solves = solves.min(self.total_modules);
        }
    }
}

/// Check whether a string is a valid serial number: exactly 6 alphanumeric
/// characters, at least one letter, at least one digit.
pub fn serial_valid(serial: &str) -> bool {
    serial.len() == 6
        && serial.chars().all(|c| c.is_ascii_alphanumeric())
        && serial.chars().any(|c| c.is_ascii_alphabetic())
        && serial.chars().any(|c| c.is_ascii_digit())
}

fn indicator_text_valid(text: &str) -> bool {
    text.len() == 3
        && (text.chars().all(|c| c.is_ascii_lowercase())
            || text.chars().all(|c| c.is_ascii_uppercase()))
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::ScriptedConsole;

    fn acquired(report: EdgeworkReport) -> Edgework {
        let mut edgework = Edgework::new();
        let mut console = ScriptedConsole::new(Vec::<String>::new());
        edgework.acquire(&mut console, report).unwrap();
        edgework
    }

    #[test]
    fn serial_validation() {
        assert!(serial_valid("ab3de1"));
        assert!(serial_valid("AB3DE1"));
        assert!(!serial_valid("abcdef")); // no digit
        assert!(!serial_valid("123456")); // no letter
        assert!(!serial_valid("ab3de")); // too short
        assert!(!serial_valid("ab3de12")); // too long
        assert!(!serial_valid("ab3de!")); // non-alphanumeric
    }

    #[test]
    fn serial_queries_unset_serial_default() {
        let edgework = Edgework::new();
        assert!(!edgework.serial_last_digit_odd());
        assert!(!edgework.serial_contains_vowel());
        assert_eq!(edgework.serial_first_digit(), None);
        assert_eq!(edgework.serial_first_letter(), None);
    }

    #[test]
    fn serial_queries_set_serial() {
        let edgework = acquired(EdgeworkReport {
            serial: Some("XU2RA7".to_string()),
            ..Default::default()
        });
        assert_eq!(edgework.serial(), "xu2ra7");
        assert!(edgework.serial_last_digit_odd());
        assert!(edgework.serial_contains_vowel());
        assert_eq!(edgework.serial_first_digit(), Some('2'));
        assert_eq!(edgework.serial_first_letter(), Some('x'));
    }

    #[test]
    fn invalid_serial_override_is_ignored() {
        // No SERIAL flag declared, so acquisition silently leaves it unset.
        let edgework = acquired(EdgeworkReport {
            serial: Some("nope".to_string()),
            ..Default::default()
        });
        assert_eq!(edgework.serial(), "");
    }

    #[test]
    fn invalid_serial_override_falls_through_to_prompt() {
        let mut edgework = Edgework::new();
        edgework.require(EdgeFlags::SERIAL);
        let mut console = ScriptedConsole::new(["zz", "qw3er9"]);
        edgework
            .acquire(
                &mut console,
                EdgeworkReport {
                    serial: Some("badserial".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(edgework.serial(), "qw3er9");
    }

    #[test]
    fn detonation_on_nth_strike_and_not_before() {
        let mut edgework = acquired(EdgeworkReport {
            max_strikes: Some(3),
            ..Default::default()
        });
        assert!(edgework.register_strike().is_ok());
        assert!(edgework.register_strike().is_ok());
        let third = edgework.register_strike();
        assert!(matches!(third, Err(SolveError::Detonated { strikes: 3 })));
        assert!(edgework.strike_limit_reached());
    }

    #[test]
    fn no_strike_limit_never_detonates() {
        let mut edgework = Edgework::new();
        for _ in 0..100 {
            edgework.register_strike().unwrap();
        }
        assert!(!edgework.strike_limit_reached());
    }

    #[test]
    fn solves_clamped_to_total_modules() {
        let edgework = acquired(EdgeworkReport {
            total_modules: Some(4),
            solves: Some(11),
            ..Default::default()
        });
        assert_eq!(edgework.solves(), 4);
        assert!(edgework.defused());
    }

    #[test]
    fn strikes_clamped_to_known_limit() {
        let edgework = acquired(EdgeworkReport {
            max_strikes: Some(2),
            strikes: Some(9),
            ..Default::default()
        });
        assert_eq!(edgework.strikes(), 2);
    }

    #[test]
    fn defused_tracks_solve_count_exactly() {
        let mut edgework = acquired(EdgeworkReport {
            total_modules: Some(2),
            ..Default::default()
        });
        assert!(!edgework.defused());
        edgework.register_solve();
        assert!(!edgework.defused());
        edgework.register_solve();
        assert!(edgework.defused());
    }

    #[test]
    fn port_membership_across_plates() {
        let mut edgework = acquired(EdgeworkReport {
            port_plates: Some(vec![vec![Port::Parallel, Port::Ps2], vec![]]),
            ..Default::default()
        });
        assert!(edgework.has_port(Port::Parallel));
        assert!(!edgework.has_port(Port::Rca));
        // Adding a plate without the port never removes it.
        edgework.port_plates.push(vec![Port::Serial]);
        assert!(edgework.has_port(Port::Parallel));
    }

    #[test]
    fn indicator_membership_is_case_insensitive_on_label() {
        let edgework = acquired(EdgeworkReport {
            indicators: Some(vec![
                Indicator::new("FRK", true),
                Indicator::new("car", false),
            ]),
            ..Default::default()
        });
        assert!(edgework.has_indicator("frk", true));
        assert!(edgework.has_indicator("FRK", true));
        assert!(!edgework.has_indicator("frk", false));
        assert!(edgework.has_indicator("car", false));
        assert!(!edgework.has_indicator("bob", true));
    }

    #[test]
    fn acquire_prompts_only_for_required_fields() {
        let mut edgework = Edgework::new();
        edgework.require(EdgeFlags::BATTERIES);
        let mut console = ScriptedConsole::new(["3"]);
        edgework
            .acquire(&mut console, EdgeworkReport::default())
            .unwrap();
        assert_eq!(edgework.batteries(), 3);
        assert_eq!(console.answers_remaining(), 0);
        assert!(console.saw("How many batteries are on the bomb?"));
        assert!(!console.saw("What is the serial number?"));
    }

    #[test]
    fn acquire_parses_indicator_case_convention() {
        let mut edgework = Edgework::new();
        edgework.require(EdgeFlags::INDICATORS);
        // yes, then indicators one per line ended by a blank line
        let mut console = ScriptedConsole::new(["y", "CAR", "frk", ""]);
        edgework
            .acquire(&mut console, EdgeworkReport::default())
            .unwrap();
        assert_eq!(
            edgework.indicators(),
            &[Indicator::new("car", true), Indicator::new("frk", false)]
        );
    }

    #[test]
    fn acquire_reads_port_plates() {
        let mut edgework = Edgework::new();
        edgework.require(EdgeFlags::PORTS);
        let mut console =
            ScriptedConsole::new(["y", "2", "parallel", "rj45", "", ""]);
        edgework
            .acquire(&mut console, EdgeworkReport::default())
            .unwrap();
        assert_eq!(edgework.port_plates().len(), 2);
        assert!(edgework.has_port(Port::Parallel));
        assert!(edgework.has_port(Port::Rj45));
        assert!(edgework.port_plates()[1].is_empty());
    }

    #[test]
    fn requirements_accumulate_monotonically() {
        let mut edgework = Edgework::new();
        edgework.require(EdgeFlags::SERIAL);
        edgework.require(EdgeFlags::PORTS | EdgeFlags::SERIAL);
        assert!(edgework.needs.contains(EdgeFlags::SERIAL));
        assert!(edgework.needs.contains(EdgeFlags::PORTS));
        assert!(!edgework.needs.contains(EdgeFlags::BATTERIES));
    }
}
