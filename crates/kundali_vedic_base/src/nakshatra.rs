//! Nakshatra (lunar mansion) computation and reference table.
//!
//! The ecliptic circle is divided into 27 equal nakshatras of 13 deg 20'
//! (13.3333... deg) each. Each nakshatra has 4 padas (quarters) of
//! 3 deg 20' each.
//!
//! The reference table stores segment bounds in whole arc-minutes (800'
//! per nakshatra) so contiguity and closure can be checked exactly.

use kundali_frames::normalize_360;
use serde::Serialize;

use crate::error::VedicError;
use crate::graha::Graha;

/// Span of one nakshatra: 360/27 = 13.3333... degrees.
pub const NAKSHATRA_SPAN_27: f64 = 360.0 / 27.0;

/// Span of one pada: 13.3333.../4 = 3.3333... degrees.
pub const PADA_SPAN: f64 = NAKSHATRA_SPAN_27 / 4.0;

/// Span of one nakshatra in arc-minutes.
pub const NAKSHATRA_SPAN_ARCMIN: u32 = 800;

/// Full circle in arc-minutes.
const CIRCLE_ARCMIN: u32 = 360 * 60;

/// The 27 nakshatras from Ashwini to Revati.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishtha,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

/// All 27 nakshatras in order (0 = Ashwini, 26 = Revati).
pub const ALL_NAKSHATRAS: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishtha,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

impl Nakshatra {
    /// Sanskrit name of the nakshatra.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini",
            Self::Bharani => "Bharani",
            Self::Krittika => "Krittika",
            Self::Rohini => "Rohini",
            Self::Mrigashira => "Mrigashira",
            Self::Ardra => "Ardra",
            Self::Punarvasu => "Punarvasu",
            Self::Pushya => "Pushya",
            Self::Ashlesha => "Ashlesha",
            Self::Magha => "Magha",
            Self::PurvaPhalguni => "Purva Phalguni",
            Self::UttaraPhalguni => "Uttara Phalguni",
            Self::Hasta => "Hasta",
            Self::Chitra => "Chitra",
            Self::Swati => "Swati",
            Self::Vishakha => "Vishakha",
            Self::Anuradha => "Anuradha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Mula => "Mula",
            Self::PurvaAshadha => "Purva Ashadha",
            Self::UttaraAshadha => "Uttara Ashadha",
            Self::Shravana => "Shravana",
            Self::Dhanishtha => "Dhanishtha",
            Self::Shatabhisha => "Shatabhisha",
            Self::PurvaBhadrapada => "Purva Bhadrapada",
            Self::UttaraBhadrapada => "Uttara Bhadrapada",
            Self::Revati => "Revati",
        }
    }

    /// 0-based index (Ashwini=0 .. Revati=26).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// 1-based number (Ashwini=1 .. Revati=27).
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }

    /// Reference data for this nakshatra.
    pub fn data(self) -> &'static NakshatraData {
        &NAKSHATRA_TABLE[self as usize]
    }

    /// Vimshottari lord of the nakshatra.
    pub fn lord(self) -> Graha {
        self.data().lord
    }
}

impl std::fmt::Display for Nakshatra {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Gana (temperament) of a nakshatra.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Gana {
    Deva,
    Manushya,
    Rakshasa,
}

/// Muhurta classification of a nakshatra, which drives the activity lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NakshatraNature {
    /// Sthira.
    Fixed,
    /// Chara.
    Movable,
    /// Ugra.
    Fierce,
    /// Mishra.
    Mixed,
    /// Kshipra.
    Swift,
    /// Mridu.
    Soft,
    /// Tikshna.
    Sharp,
}

impl NakshatraNature {
    /// Activities traditionally begun under this class.
    pub const fn favorable(self) -> &'static [&'static str] {
        match self {
            Self::Fixed => &[
                "foundation laying",
                "house building",
                "planting",
                "long-term commitments",
            ],
            Self::Movable => &["travel", "buying vehicles", "gardening", "changing residence"],
            Self::Fierce => &["competition", "demolition", "confronting opponents"],
            Self::Mixed => &["routine work", "fire rituals", "metalwork"],
            Self::Swift => &["trade", "medicine", "learning", "short journeys"],
            Self::Soft => &["marriage", "arts", "friendship", "new clothes"],
            Self::Sharp => &["research", "separation", "exorcism"],
        }
    }

    /// Activities traditionally avoided under this class.
    pub const fn unfavorable(self) -> &'static [&'static str] {
        match self {
            Self::Fixed => &["travel", "starting litigation"],
            Self::Movable => &["foundation laying", "long-term commitments"],
            Self::Fierce => &["marriage", "travel", "new ventures"],
            Self::Mixed => &["marriage", "long journeys"],
            Self::Swift => &["marriage", "long-term commitments"],
            Self::Soft => &["litigation", "surgery", "demolition"],
            Self::Sharp => &["marriage", "new ventures", "travel"],
        }
    }
}

/// One row of the nakshatra reference table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NakshatraData {
    pub nakshatra: Nakshatra,
    /// Vimshottari dasha lord.
    pub lord: Graha,
    /// Presiding deity.
    pub deity: &'static str,
    pub gana: Gana,
    pub nature: NakshatraNature,
    /// Segment start, arc-minutes from 0° sidereal.
    pub start_arcmin: u32,
    /// Segment end (exclusive), arc-minutes from 0° sidereal.
    pub end_arcmin: u32,
}

impl NakshatraData {
    pub const fn favorable_activities(&self) -> &'static [&'static str] {
        self.nature.favorable()
    }

    pub const fn unfavorable_activities(&self) -> &'static [&'static str] {
        self.nature.unfavorable()
    }

    pub fn start_deg(&self) -> f64 {
        self.start_arcmin as f64 / 60.0
    }

    pub fn end_deg(&self) -> f64 {
        self.end_arcmin as f64 / 60.0
    }
}

/// Reference table, indexed by [`Nakshatra::index`].
pub static NAKSHATRA_TABLE: [NakshatraData; 27] = [
    NakshatraData {
        nakshatra: Nakshatra::Ashwini,
        lord: Graha::Ketu,
        deity: "Ashwini Kumaras",
        gana: Gana::Deva,
        nature: NakshatraNature::Swift,
        start_arcmin: 0,
        end_arcmin: 800,
    },
    NakshatraData {
        nakshatra: Nakshatra::Bharani,
        lord: Graha::Shukra,
        deity: "Yama",
        gana: Gana::Manushya,
        nature: NakshatraNature::Fierce,
        start_arcmin: 800,
        end_arcmin: 1600,
    },
    NakshatraData {
        nakshatra: Nakshatra::Krittika,
        lord: Graha::Surya,
        deity: "Agni",
        gana: Gana::Rakshasa,
        nature: NakshatraNature::Mixed,
        start_arcmin: 1600,
        end_arcmin: 2400,
    },
    NakshatraData {
        nakshatra: Nakshatra::Rohini,
        lord: Graha::Chandra,
        deity: "Prajapati",
        gana: Gana::Manushya,
        nature: NakshatraNature::Fixed,
        start_arcmin: 2400,
        end_arcmin: 3200,
    },
    NakshatraData {
        nakshatra: Nakshatra::Mrigashira,
        lord: Graha::Mangal,
        deity: "Soma",
        gana: Gana::Deva,
        nature: NakshatraNature::Soft,
        start_arcmin: 3200,
        end_arcmin: 4000,
    },
    NakshatraData {
        nakshatra: Nakshatra::Ardra,
        lord: Graha::Rahu,
        deity: "Rudra",
        gana: Gana::Manushya,
        nature: NakshatraNature::Sharp,
        start_arcmin: 4000,
        end_arcmin: 4800,
    },
    NakshatraData {
        nakshatra: Nakshatra::Punarvasu,
        lord: Graha::Guru,
        deity: "Aditi",
        gana: Gana::Deva,
        nature: NakshatraNature::Movable,
        start_arcmin: 4800,
        end_arcmin: 5600,
    },
    NakshatraData {
        nakshatra: Nakshatra::Pushya,
        lord: Graha::Shani,
        deity: "Brihaspati",
        gana: Gana::Deva,
        nature: NakshatraNature::Swift,
        start_arcmin: 5600,
        end_arcmin: 6400,
    },
    NakshatraData {
        nakshatra: Nakshatra::Ashlesha,
        lord: Graha::Buddh,
        deity: "Sarpa",
        gana: Gana::Rakshasa,
        nature: NakshatraNature::Sharp,
        start_arcmin: 6400,
        end_arcmin: 7200,
    },
    NakshatraData {
        nakshatra: Nakshatra::Magha,
        lord: Graha::Ketu,
        deity: "Pitrs",
        gana: Gana::Rakshasa,
        nature: NakshatraNature::Fierce,
        start_arcmin: 7200,
        end_arcmin: 8000,
    },
    NakshatraData {
        nakshatra: Nakshatra::PurvaPhalguni,
        lord: Graha::Shukra,
        deity: "Bhaga",
        gana: Gana::Manushya,
        nature: NakshatraNature::Fierce,
        start_arcmin: 8000,
        end_arcmin: 8800,
    },
    NakshatraData {
        nakshatra: Nakshatra::UttaraPhalguni,
        lord: Graha::Surya,
        deity: "Aryaman",
        gana: Gana::Manushya,
        nature: NakshatraNature::Fixed,
        start_arcmin: 8800,
        end_arcmin: 9600,
    },
    NakshatraData {
        nakshatra: Nakshatra::Hasta,
        lord: Graha::Chandra,
        deity: "Savitr",
        gana: Gana::Deva,
        nature: NakshatraNature::Swift,
        start_arcmin: 9600,
        end_arcmin: 10400,
    },
    NakshatraData {
        nakshatra: Nakshatra::Chitra,
        lord: Graha::Mangal,
        deity: "Tvashtr",
        gana: Gana::Rakshasa,
        nature: NakshatraNature::Soft,
        start_arcmin: 10400,
        end_arcmin: 11200,
    },
    NakshatraData {
        nakshatra: Nakshatra::Swati,
        lord: Graha::Rahu,
        deity: "Vayu",
        gana: Gana::Deva,
        nature: NakshatraNature::Movable,
        start_arcmin: 11200,
        end_arcmin: 12000,
    },
    NakshatraData {
        nakshatra: Nakshatra::Vishakha,
        lord: Graha::Guru,
        deity: "Indragni",
        gana: Gana::Rakshasa,
        nature: NakshatraNature::Mixed,
        start_arcmin: 12000,
        end_arcmin: 12800,
    },
    NakshatraData {
        nakshatra: Nakshatra::Anuradha,
        lord: Graha::Shani,
        deity: "Mitra",
        gana: Gana::Deva,
        nature: NakshatraNature::Soft,
        start_arcmin: 12800,
        end_arcmin: 13600,
    },
    NakshatraData {
        nakshatra: Nakshatra::Jyeshtha,
        lord: Graha::Buddh,
        deity: "Indra",
        gana: Gana::Rakshasa,
        nature: NakshatraNature::Sharp,
        start_arcmin: 13600,
        end_arcmin: 14400,
    },
    NakshatraData {
        nakshatra: Nakshatra::Mula,
        lord: Graha::Ketu,
        deity: "Nirriti",
        gana: Gana::Rakshasa,
        nature: NakshatraNature::Sharp,
        start_arcmin: 14400,
        end_arcmin: 15200,
    },
    NakshatraData {
        nakshatra: Nakshatra::PurvaAshadha,
        lord: Graha::Shukra,
        deity: "Apas",
        gana: Gana::Manushya,
        nature: NakshatraNature::Fierce,
        start_arcmin: 15200,
        end_arcmin: 16000,
    },
    NakshatraData {
        nakshatra: Nakshatra::UttaraAshadha,
        lord: Graha::Surya,
        deity: "Vishvedevas",
        gana: Gana::Manushya,
        nature: NakshatraNature::Fixed,
        start_arcmin: 16000,
        end_arcmin: 16800,
    },
    NakshatraData {
        nakshatra: Nakshatra::Shravana,
        lord: Graha::Chandra,
        deity: "Vishnu",
        gana: Gana::Deva,
        nature: NakshatraNature::Movable,
        start_arcmin: 16800,
        end_arcmin: 17600,
    },
    NakshatraData {
        nakshatra: Nakshatra::Dhanishtha,
        lord: Graha::Mangal,
        deity: "Vasus",
        gana: Gana::Rakshasa,
        nature: NakshatraNature::Movable,
        start_arcmin: 17600,
        end_arcmin: 18400,
    },
    NakshatraData {
        nakshatra: Nakshatra::Shatabhisha,
        lord: Graha::Rahu,
        deity: "Varuna",
        gana: Gana::Rakshasa,
        nature: NakshatraNature::Movable,
        start_arcmin: 18400,
        end_arcmin: 19200,
    },
    NakshatraData {
        nakshatra: Nakshatra::PurvaBhadrapada,
        lord: Graha::Guru,
        deity: "Aja Ekapada",
        gana: Gana::Manushya,
        nature: NakshatraNature::Fierce,
        start_arcmin: 19200,
        end_arcmin: 20000,
    },
    NakshatraData {
        nakshatra: Nakshatra::UttaraBhadrapada,
        lord: Graha::Shani,
        deity: "Ahir Budhnya",
        gana: Gana::Manushya,
        nature: NakshatraNature::Fixed,
        start_arcmin: 20000,
        end_arcmin: 20800,
    },
    NakshatraData {
        nakshatra: Nakshatra::Revati,
        lord: Graha::Buddh,
        deity: "Pushan",
        gana: Gana::Deva,
        nature: NakshatraNature::Soft,
        start_arcmin: 20800,
        end_arcmin: 21600,
    },
];

/// Verify the reference table: row order, equal widths, contiguity and
/// closure of the last segment back onto the first at 360°.
pub fn check_nakshatra_table() -> Result<(), VedicError> {
    let first = &NAKSHATRA_TABLE[0];
    if first.start_arcmin != 0 {
        return Err(VedicError::TableIntegrity(format!(
            "first nakshatra starts at {}' instead of 0'",
            first.start_arcmin
        )));
    }
    for (i, row) in NAKSHATRA_TABLE.iter().enumerate() {
        if row.nakshatra.index() as usize != i {
            return Err(VedicError::TableIntegrity(format!(
                "row {i} holds {}",
                row.nakshatra.name()
            )));
        }
        if row.end_arcmin.checked_sub(row.start_arcmin) != Some(NAKSHATRA_SPAN_ARCMIN) {
            return Err(VedicError::TableIntegrity(format!(
                "{} spans {}'..{}'",
                row.nakshatra.name(),
                row.start_arcmin,
                row.end_arcmin
            )));
        }
        if let Some(next) = NAKSHATRA_TABLE.get(i + 1) {
            if row.end_arcmin != next.start_arcmin {
                return Err(VedicError::TableIntegrity(format!(
                    "gap between {} and {}",
                    row.nakshatra.name(),
                    next.nakshatra.name()
                )));
            }
        }
    }
    let last = &NAKSHATRA_TABLE[26];
    if last.end_arcmin != first.start_arcmin + CIRCLE_ARCMIN {
        return Err(VedicError::TableIntegrity(format!(
            "{} ends at {}' instead of closing the circle",
            last.nakshatra.name(),
            last.end_arcmin
        )));
    }
    Ok(())
}

/// Result of a nakshatra lookup from a longitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NakshatraInfo {
    /// The nakshatra.
    pub nakshatra: Nakshatra,
    /// 1-based number (1 = Ashwini).
    pub number: u8,
    /// Display name.
    pub name: &'static str,
    /// Pada (quarter) within the nakshatra, 1-4.
    pub pada: u8,
    /// Vimshottari lord.
    pub lord: Graha,
    /// Decimal degrees within the nakshatra [0.0, 13.333...).
    pub degrees_in_nakshatra: f64,
    /// Decimal degrees within the pada [0.0, 3.333...).
    pub degrees_in_pada: f64,
}

/// Determine nakshatra and pada from sidereal ecliptic longitude.
pub fn nakshatra_from_longitude(sidereal_lon_deg: f64) -> NakshatraInfo {
    let lon = normalize_360(sidereal_lon_deg);
    let nak_idx = ((lon / NAKSHATRA_SPAN_27).floor() as u8).min(26);
    let degrees_in_nakshatra = (lon - nak_idx as f64 * NAKSHATRA_SPAN_27).max(0.0);
    let pada_idx = ((degrees_in_nakshatra / PADA_SPAN).floor() as u8).min(3);
    let degrees_in_pada = degrees_in_nakshatra - pada_idx as f64 * PADA_SPAN;
    let nakshatra = ALL_NAKSHATRAS[nak_idx as usize];

    NakshatraInfo {
        nakshatra,
        number: nakshatra.number(),
        name: nakshatra.name(),
        pada: pada_idx + 1,
        lord: nakshatra.lord(),
        degrees_in_nakshatra,
        degrees_in_pada,
    }
}

/// Reference data for a 1-based nakshatra number.
pub fn nakshatra_by_number(number: u8) -> Result<&'static NakshatraData, VedicError> {
    match number {
        1..=27 => Ok(&NAKSHATRA_TABLE[number as usize - 1]),
        _ => Err(VedicError::NakshatraOutOfRange(number)),
    }
}

fn fold_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Reference data by name, ignoring case, spaces and punctuation.
pub fn nakshatra_by_name(name: &str) -> Result<&'static NakshatraData, VedicError> {
    let wanted = fold_name(name);
    NAKSHATRA_TABLE
        .iter()
        .find(|row| fold_name(row.nakshatra.name()) == wanted)
        .ok_or_else(|| VedicError::UnknownNakshatra(name.to_string()))
}
