use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub font_family: String,
    pub font_size: f32,
    pub card_fill: String,
    pub card_text_color: String,
    pub card_border_color: String,
    pub line_color: String,
    pub spouse_line_color: String,
    pub divorced_line_color: String,
    pub background: String,
}

impl Theme {
    pub fn classic() -> Self {
        Self {
            font_family: "\"trebuchet ms\", verdana, arial, sans-serif".to_string(),
            font_size: 16.0,
            card_fill: "#ECECFF".to_string(),
            card_text_color: "#333333".to_string(),
            card_border_color: "#9370DB".to_string(),
            line_color: "#333333".to_string(),
            spouse_line_color: "#B45A7E".to_string(),
            divorced_line_color: "#A0A4AD".to_string(),
            background: "#FFFFFF".to_string(),
        }
    }

    pub fn modern() -> Self {
        Self {
            font_family: "Inter, Segoe UI, system-ui, -apple-system, sans-serif".to_string(),
            font_size: 13.0,
            card_fill: "#F8FAFF".to_string(),
            card_text_color: "#1C2430".to_string(),
            card_border_color: "#C7D2E5".to_string(),
            line_color: "#7A8AA6".to_string(),
            spouse_line_color: "#C26A8F".to_string(),
            divorced_line_color: "#AEB4BF".to_string(),
            background: "#FFFFFF".to_string(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::classic()
    }
}
