/// Static icon asset keyed by a weather condition code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    ClearDay,
    Rain,
    ClearNight,
    Cloud,
    CloudlyDay,
    CloudlyNight,
    Fog,
    Hail,
    NoneDay,
    NoneNight,
    Snow,
    Storm,
}

impl Icon {
    /// Icon used for any condition code outside the known set.
    pub const FALLBACK: Icon = Icon::NoneDay;

    /// Resolve a condition code to its icon. Total over all inputs.
    pub fn for_condition(code: &str) -> Self {
        match code {
            "clear_day" => Icon::ClearDay,
            "rain" => Icon::Rain,
            "clear_night" => Icon::ClearNight,
            "cloud" => Icon::Cloud,
            "cloudly_day" => Icon::CloudlyDay,
            "cloudly_night" => Icon::CloudlyNight,
            "fog" => Icon::Fog,
            "hail" => Icon::Hail,
            "none_day" => Icon::NoneDay,
            "none_night" => Icon::NoneNight,
            "snow" => Icon::Snow,
            "storm" => Icon::Storm,
            _ => Self::FALLBACK,
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Icon::ClearDay => "clear_day",
            Icon::Rain => "rain",
            Icon::ClearNight => "clear_night",
            Icon::Cloud => "cloud",
            Icon::CloudlyDay => "cloudly_day",
            Icon::CloudlyNight => "cloudly_night",
            Icon::Fog => "fog",
            Icon::Hail => "hail",
            Icon::NoneDay => "none_day",
            Icon::NoneNight => "none_night",
            Icon::Snow => "snow",
            Icon::Storm => "storm",
        }
    }

    /// Path of the bundled image, relative to the asset root.
    pub fn asset_path(&self) -> &'static str {
        match self {
            Icon::ClearDay => "assets/images/clear_day.png",
            Icon::Rain => "assets/images/rain.png",
            Icon::ClearNight => "assets/images/clear_night.png",
            Icon::Cloud => "assets/images/cloud.png",
            Icon::CloudlyDay => "assets/images/cloudly_day.png",
            Icon::CloudlyNight => "assets/images/cloudly_night.png",
            Icon::Fog => "assets/images/fog.png",
            Icon::Hail => "assets/images/hail.png",
            Icon::NoneDay => "assets/images/none_day.png",
            Icon::NoneNight => "assets/images/none_night.png",
            Icon::Snow => "assets/images/snow.png",
            Icon::Storm => "assets/images/storm.png",
        }
    }

    /// Glyph shown in place of the image in a terminal.
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::ClearDay => "☀",
            Icon::Rain => "🌧",
            Icon::ClearNight => "🌙",
            Icon::Cloud => "☁",
            Icon::CloudlyDay => "⛅",
            Icon::CloudlyNight => "☁🌙",
            Icon::Fog => "🌫",
            Icon::Hail => "🌨",
            Icon::NoneDay => "🌤",
            Icon::NoneNight => "🌌",
            Icon::Snow => "❄",
            Icon::Storm => "⛈",
        }
    }

    pub const fn all() -> &'static [Icon] {
        &[
            Icon::ClearDay,
            Icon::Rain,
            Icon::ClearNight,
            Icon::Cloud,
            Icon::CloudlyDay,
            Icon::CloudlyNight,
            Icon::Fog,
            Icon::Hail,
            Icon::NoneDay,
            Icon::NoneNight,
            Icon::Snow,
            Icon::Storm,
        ]
    }
}

impl std::fmt::Display for Icon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.glyph())
    }
}
