#[derive(Debug, Clone, PartialEq)]
pub struct WindowSettings {
    pub title: String,
    pub width: f64,
    pub height: f64,
    pub min_width: f64,
    pub min_height: f64,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: String::from("Julia Animator"),
            width: 800.0,
            height: 600.0,
            min_width: 200.0,
            min_height: 200.0,
        }
    }
}
