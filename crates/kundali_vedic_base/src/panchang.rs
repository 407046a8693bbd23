//! Panchang elements at a single instant: tithi, karana, yoga and vaar.
//!
//! Tithi and karana discretize the Moon−Sun elongation into 12° and 6°
//! segments; yoga discretizes the sidereal Sun+Moon sum into 27 segments.

use kundali_frames::normalize_360;
use serde::Serialize;

use crate::graha::Graha;

/// Width of one tithi in degrees of elongation.
pub const TITHI_SEGMENT_DEG: f64 = 12.0;

/// Width of one karana (half-tithi) in degrees of elongation.
pub const KARANA_SEGMENT_DEG: f64 = 6.0;

/// Width of one yoga in degrees of Sun+Moon sum.
pub const YOGA_SEGMENT_DEG: f64 = 360.0 / 27.0;

// ---------------------------------------------------------------------------
// Tithi
// ---------------------------------------------------------------------------

/// Lunar fortnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Paksha {
    /// Waxing (bright) half: elongation in [0, 180).
    Shukla,
    /// Waning (dark) half: elongation in [180, 360).
    Krishna,
}

impl Paksha {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Shukla => "Shukla",
            Self::Krishna => "Krishna",
        }
    }
}

/// Tithi names within a paksha. The 15th splits into Purnima and Amavasya.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Tithi {
    Pratipada,
    Dwitiya,
    Tritiya,
    Chaturthi,
    Panchami,
    Shashthi,
    Saptami,
    Ashtami,
    Navami,
    Dashami,
    Ekadashi,
    Dwadashi,
    Trayodashi,
    Chaturdashi,
    Purnima,
    Amavasya,
}

const TITHI_SEQUENCE: [Tithi; 14] = [
    Tithi::Pratipada,
    Tithi::Dwitiya,
    Tithi::Tritiya,
    Tithi::Chaturthi,
    Tithi::Panchami,
    Tithi::Shashthi,
    Tithi::Saptami,
    Tithi::Ashtami,
    Tithi::Navami,
    Tithi::Dashami,
    Tithi::Ekadashi,
    Tithi::Dwadashi,
    Tithi::Trayodashi,
    Tithi::Chaturdashi,
];

impl Tithi {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pratipada => "Pratipada",
            Self::Dwitiya => "Dwitiya",
            Self::Tritiya => "Tritiya",
            Self::Chaturthi => "Chaturthi",
            Self::Panchami => "Panchami",
            Self::Shashthi => "Shashthi",
            Self::Saptami => "Saptami",
            Self::Ashtami => "Ashtami",
            Self::Navami => "Navami",
            Self::Dashami => "Dashami",
            Self::Ekadashi => "Ekadashi",
            Self::Dwadashi => "Dwadashi",
            Self::Trayodashi => "Trayodashi",
            Self::Chaturdashi => "Chaturdashi",
            Self::Purnima => "Purnima",
            Self::Amavasya => "Amavasya",
        }
    }

    /// Tithi for a 1-based number in a paksha (1..=15).
    ///
    /// The 15th of Shukla is Purnima, the 15th of Krishna is Amavasya.
    pub const fn from_paksha_number(paksha: Paksha, in_paksha: u8) -> Self {
        match (paksha, in_paksha) {
            (Paksha::Shukla, 15..) => Self::Purnima,
            (Paksha::Krishna, 15..) => Self::Amavasya,
            (_, 0) => Self::Pratipada,
            (_, n) => TITHI_SEQUENCE[n as usize - 1],
        }
    }
}

/// Tithi position for an elongation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TithiInfo {
    pub tithi: Tithi,
    /// 1-based tithi number in the synodic month (1..=30).
    pub number: u8,
    pub paksha: Paksha,
    /// 1-based number within the paksha (1..=15). Purnima and Amavasya
    /// both carry 15.
    pub tithi_in_paksha: u8,
    /// Fraction of the current 12° segment elapsed [0, 1).
    pub progress: f64,
}

impl TithiInfo {
    pub const fn name(&self) -> &'static str {
        self.tithi.name()
    }
}

/// Tithi from Moon−Sun elongation in degrees.
pub fn tithi_from_elongation(elongation_deg: f64) -> TithiInfo {
    let sep = normalize_360(elongation_deg);
    let idx = ((sep / TITHI_SEGMENT_DEG).floor() as u8).min(29);
    let paksha = if sep < 180.0 { Paksha::Shukla } else { Paksha::Krishna };
    let tithi_in_paksha = idx % 15 + 1;
    let within = (sep - idx as f64 * TITHI_SEGMENT_DEG).max(0.0);

    TithiInfo {
        tithi: Tithi::from_paksha_number(paksha, tithi_in_paksha),
        number: idx + 1,
        paksha,
        tithi_in_paksha,
        progress: (within / TITHI_SEGMENT_DEG).min(1.0 - f64::EPSILON),
    }
}

/// Tithi from sidereal (or tropical) Moon and Sun longitudes.
pub fn tithi_from_longitudes(moon_deg: f64, sun_deg: f64) -> TithiInfo {
    tithi_from_elongation(moon_deg - sun_deg)
}

// ---------------------------------------------------------------------------
// Karana
// ---------------------------------------------------------------------------

/// The eleven karanas: seven movable (chara) and four fixed (sthira).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Karana {
    Bava,
    Balava,
    Kaulava,
    Taitila,
    Garaja,
    Vanija,
    Vishti,
    Shakuni,
    Chatushpada,
    Naga,
    Kimstughna,
}

const MOVABLE_KARANAS: [Karana; 7] = [
    Karana::Bava,
    Karana::Balava,
    Karana::Kaulava,
    Karana::Taitila,
    Karana::Garaja,
    Karana::Vanija,
    Karana::Vishti,
];

impl Karana {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bava => "Bava",
            Self::Balava => "Balava",
            Self::Kaulava => "Kaulava",
            Self::Taitila => "Taitila",
            Self::Garaja => "Garaja",
            Self::Vanija => "Vanija",
            Self::Vishti => "Vishti",
            Self::Shakuni => "Shakuni",
            Self::Chatushpada => "Chatushpada",
            Self::Naga => "Naga",
            Self::Kimstughna => "Kimstughna",
        }
    }

    /// Karana for a 0-based sequence index within the synodic month (0..60).
    pub const fn from_sequence_index(index: u8) -> Self {
        match index {
            0 => Self::Kimstughna,
            1..=56 => MOVABLE_KARANAS[((index - 1) % 7) as usize],
            57 => Self::Shakuni,
            58 => Self::Chatushpada,
            _ => Self::Naga,
        }
    }

    pub const fn is_fixed(self) -> bool {
        matches!(
            self,
            Self::Shakuni | Self::Chatushpada | Self::Naga | Self::Kimstughna
        )
    }
}

/// Karana position for an elongation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KaranaInfo {
    pub karana: Karana,
    /// 0-based karana sequence index within the synodic month (0..59).
    pub karana_index: u8,
}

/// Karana from Moon−Sun elongation in degrees.
pub fn karana_from_elongation(elongation_deg: f64) -> KaranaInfo {
    let sep = normalize_360(elongation_deg);
    let karana_index = ((sep / KARANA_SEGMENT_DEG).floor() as u8).min(59);
    KaranaInfo {
        karana: Karana::from_sequence_index(karana_index),
        karana_index,
    }
}

// ---------------------------------------------------------------------------
// Yoga
// ---------------------------------------------------------------------------

/// The 27 luni-solar yogas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Yoga {
    Vishkambha,
    Priti,
    Ayushman,
    Saubhagya,
    Shobhana,
    Atiganda,
    Sukarma,
    Dhriti,
    Shula,
    Ganda,
    Vriddhi,
    Dhruva,
    Vyaghata,
    Harshana,
    Vajra,
    Siddhi,
    Vyatipata,
    Variyan,
    Parigha,
    Shiva,
    Siddha,
    Sadhya,
    Shubha,
    Shukla,
    Brahma,
    Indra,
    Vaidhriti,
}

/// All 27 yogas in order (0 = Vishkambha).
pub const ALL_YOGAS: [Yoga; 27] = [
    Yoga::Vishkambha,
    Yoga::Priti,
    Yoga::Ayushman,
    Yoga::Saubhagya,
    Yoga::Shobhana,
    Yoga::Atiganda,
    Yoga::Sukarma,
    Yoga::Dhriti,
    Yoga::Shula,
    Yoga::Ganda,
    Yoga::Vriddhi,
    Yoga::Dhruva,
    Yoga::Vyaghata,
    Yoga::Harshana,
    Yoga::Vajra,
    Yoga::Siddhi,
    Yoga::Vyatipata,
    Yoga::Variyan,
    Yoga::Parigha,
    Yoga::Shiva,
    Yoga::Siddha,
    Yoga::Sadhya,
    Yoga::Shubha,
    Yoga::Shukla,
    Yoga::Brahma,
    Yoga::Indra,
    Yoga::Vaidhriti,
];

impl Yoga {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Vishkambha => "Vishkambha",
            Self::Priti => "Priti",
            Self::Ayushman => "Ayushman",
            Self::Saubhagya => "Saubhagya",
            Self::Shobhana => "Shobhana",
            Self::Atiganda => "Atiganda",
            Self::Sukarma => "Sukarma",
            Self::Dhriti => "Dhriti",
            Self::Shula => "Shula",
            Self::Ganda => "Ganda",
            Self::Vriddhi => "Vriddhi",
            Self::Dhruva => "Dhruva",
            Self::Vyaghata => "Vyaghata",
            Self::Harshana => "Harshana",
            Self::Vajra => "Vajra",
            Self::Siddhi => "Siddhi",
            Self::Vyatipata => "Vyatipata",
            Self::Variyan => "Variyan",
            Self::Parigha => "Parigha",
            Self::Shiva => "Shiva",
            Self::Siddha => "Siddha",
            Self::Sadhya => "Sadhya",
            Self::Shubha => "Shubha",
            Self::Shukla => "Shukla",
            Self::Brahma => "Brahma",
            Self::Indra => "Indra",
            Self::Vaidhriti => "Vaidhriti",
        }
    }
}

/// Yoga position for a Sun+Moon sum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YogaInfo {
    pub yoga: Yoga,
    /// 0-based yoga index (0..26).
    pub yoga_index: u8,
}

/// Yoga from the sidereal Sun+Moon longitude sum in degrees.
pub fn yoga_from_sum(sum_deg: f64) -> YogaInfo {
    let sum = normalize_360(sum_deg);
    let yoga_index = ((sum / YOGA_SEGMENT_DEG).floor() as u8).min(26);
    YogaInfo {
        yoga: ALL_YOGAS[yoga_index as usize],
        yoga_index,
    }
}

// ---------------------------------------------------------------------------
// Vaar
// ---------------------------------------------------------------------------

/// Vedic weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Vaar {
    Ravivaar,
    Somavaar,
    Mangalavaar,
    Budhavaar,
    Guruvaar,
    Shukravaar,
    Shanivaar,
}

const ALL_VAARS: [Vaar; 7] = [
    Vaar::Ravivaar,
    Vaar::Somavaar,
    Vaar::Mangalavaar,
    Vaar::Budhavaar,
    Vaar::Guruvaar,
    Vaar::Shukravaar,
    Vaar::Shanivaar,
];

impl Vaar {
    /// Vaar for a weekday index, 0 = Sunday, wrapping modulo 7.
    pub const fn from_weekday(index: u8) -> Self {
        ALL_VAARS[(index % 7) as usize]
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Ravivaar => "Ravivaar",
            Self::Somavaar => "Somavaar",
            Self::Mangalavaar => "Mangalavaar",
            Self::Budhavaar => "Budhavaar",
            Self::Guruvaar => "Guruvaar",
            Self::Shukravaar => "Shukravaar",
            Self::Shanivaar => "Shanivaar",
        }
    }

    /// Ruling graha of the weekday.
    pub const fn lord(self) -> Graha {
        match self {
            Self::Ravivaar => Graha::Surya,
            Self::Somavaar => Graha::Chandra,
            Self::Mangalavaar => Graha::Mangal,
            Self::Budhavaar => Graha::Buddh,
            Self::Guruvaar => Graha::Guru,
            Self::Shukravaar => Graha::Shukra,
            Self::Shanivaar => Graha::Shani,
        }
    }
}
