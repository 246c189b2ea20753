//! Pure mapping from screen state to what gets shown.

use std::fmt;

use crate::{
    icon::Icon,
    model::{ForecastEntry, WeatherResult},
    screen::{RequestState, WeatherScreen},
};

pub const TITLE: &str = "Digite o nome da cidade";
pub const PLACEHOLDER: &str = "Digite o nome da cidade...";
pub const SUBMIT_LABEL: &str = "Ver temperatura";
pub const LOADING_LABEL: &str = "Carregando...";
pub const FORECAST_TITLE: &str = "Próximos dias";

#[derive(Debug, Clone, PartialEq)]
pub struct View {
    pub title: &'static str,
    pub query: String,
    pub submit_label: &'static str,
    pub loading: bool,
    pub error: Option<String>,
    pub current: Option<CurrentPanel>,
    pub forecast: Option<ForecastSection>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CurrentPanel {
    pub city: String,
    pub temperature: String,
    pub icon: Icon,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForecastSection {
    pub title: &'static str,
    pub rows: Vec<ForecastRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForecastRow {
    pub date: String,
    pub max: String,
    pub min: String,
    pub icon: Icon,
    pub description: String,
    pub rain_icon: Icon,
    pub rain_probability: String,
}

pub fn render(screen: &WeatherScreen) -> View {
    let state = screen.state();
    let result = state.result();

    View {
        title: TITLE,
        query: screen.query().to_string(),
        submit_label: SUBMIT_LABEL,
        loading: matches!(state, RequestState::Loading),
        error: state.error().map(str::to_string),
        current: result.map(current_panel),
        forecast: result.and_then(forecast_section),
    }
}

fn current_panel(result: &WeatherResult) -> CurrentPanel {
    CurrentPanel {
        city: result.city.clone(),
        temperature: format!("{}°C", result.temp),
        icon: Icon::for_condition(&result.condition_slug),
        description: result.description.clone(),
    }
}

/// Present only when the forecast is non-empty; today (index 0) is skipped.
fn forecast_section(result: &WeatherResult) -> Option<ForecastSection> {
    if result.forecast.is_empty() {
        return None;
    }

    Some(ForecastSection {
        title: FORECAST_TITLE,
        rows: result.upcoming().iter().map(forecast_row).collect(),
    })
}

fn forecast_row(entry: &ForecastEntry) -> ForecastRow {
    ForecastRow {
        date: entry.date.clone(),
        max: format!("{}ºC", entry.max),
        min: format!("{}ºC", entry.min),
        icon: Icon::for_condition(&entry.condition),
        description: entry.description.clone(),
        rain_icon: Icon::Rain,
        rain_probability: format!("{}% chance de chuva", entry.rain_probability),
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        if self.query.is_empty() {
            writeln!(f, "> {PLACEHOLDER}")?;
        } else {
            writeln!(f, "> {}", self.query)?;
        }
        writeln!(f, "[{}]", self.submit_label)?;

        if self.loading {
            writeln!(f, "\n{LOADING_LABEL}")?;
        }

        if let Some(error) = &self.error {
            writeln!(f, "\n{error}")?;
        }

        if let Some(current) = &self.current {
            writeln!(f)?;
            writeln!(f, "{}", current.city)?;
            writeln!(f, "{}", current.temperature)?;
            writeln!(f, "{}", current.icon)?;
            writeln!(f, "{}", current.description)?;
        }

        if let Some(section) = &self.forecast {
            writeln!(f, "\n{}", section.title)?;
            for row in &section.rows {
                writeln!(f)?;
                writeln!(f, "{}", row.date)?;
                writeln!(f, "Máxima: {}", row.max)?;
                writeln!(f, "Mínima: {}", row.min)?;
                writeln!(f, "{} {}", row.icon, row.description)?;
                writeln!(f, "{} {}", row.rain_icon, row.rain_probability)?;
            }
        }

        Ok(())
    }
}
