/// Animation timing for the rendered dashboard, in seconds
pub mod animation {
    /// Delay added per service card position before it fades in
    pub const CARD_STAGGER: f64 = 0.1;

    /// Fade-in duration of a service card
    pub const CARD_DURATION: f64 = 0.5;

    /// Delay added per service card position before its uptime bar grows
    pub const BAR_STAGGER: f64 = 0.2;

    /// Growth duration of an uptime bar
    pub const BAR_DURATION: f64 = 1.0;

    /// Pop-in duration of a stat card
    pub const STAT_DURATION: f64 = 0.5;

    /// Slide-in duration of the header
    pub const HEADER_DURATION: f64 = 0.6;

    /// Delay before the footer fades in
    pub const FOOTER_DELAY: f64 = 0.8;

    /// Fade-in duration of the footer
    pub const FOOTER_DURATION: f64 = 0.6;
}

/// Fixed dashboard copy
pub mod labels {
    pub const SERVICE_STATE: &str = "Estado del servicio";
    pub const RESPONSE_TIME: &str = "Tiempo de respuesta";
    pub const REQUESTS: &str = "Peticiones";
    pub const LAST_UPDATE: &str = "Última actualización";
}

/// Configuration file locations
pub mod config {
    /// Directory under the user config dir
    pub const DIR_NAME: &str = "statusboard";

    /// Dashboard definition file name
    pub const FILE_NAME: &str = "dashboard.toml";
}

/// Footer timestamp format, as `toLocaleTimeString("es-ES")` prints it:
/// 24-hour, unpadded hour
pub const TIME_FORMAT: &str = "%-H:%M:%S";
