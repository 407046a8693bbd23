//! Sidereal birth-chart generation.
//!
//! [`generate_chart`] validates a [`BirthInput`], runs the staged pipeline
//! in [`pipeline`] and returns an immutable [`BirthChart`]. Failures carry
//! the [`Stage`] that raised them.
//!
//! ```
//! use kundali_chart::{BirthInput, generate_chart};
//!
//! let input = BirthInput::new(1990, 5, 15, 14, 30, 0, 28.6139, 77.2090);
//! let chart = generate_chart(&input).unwrap();
//! assert_eq!(chart.planets().len(), 9);
//! ```

pub mod chart;
pub mod config;
pub mod error;
pub mod input;
pub mod pipeline;

pub use chart::{BirthChart, PlanetAspect, PlanetPosition};
pub use config::{ChartConfig, ConfigError, InvalidConfig};
pub use error::{ChartError, Stage};
pub use input::{BirthInput, InputError};
pub use pipeline::{generate_chart, generate_chart_with};
