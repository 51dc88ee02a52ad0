//! Message contracts between the controller and a UI frontend.
//!
//! Messages are JSON objects using the `#[serde(tag = "type", content =
//! "data")]` layout, one per line on the headless frontend's stdin/stdout.

use serde::{Deserialize, Serialize};

use crate::bridge::ControlEvent;
use crate::controller::RenderStyle;

/// Messages from the controller to the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum AppToUi {
    /// Full state sync, sent at startup and on request.
    Initialize {
        /// Current style outputs.
        style: RenderStyle,
        /// Preset swatches for the picker.
        swatches: Vec<String>,
        /// The picker's current value.
        picker_value: String,
    },

    /// The style outputs changed.
    StyleUpdated {
        style: RenderStyle,
    },

    /// An inbound message could not be handled.
    Error {
        message: String,
    },
}

/// Messages from the UI to the controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum UiToApp {
    /// Ask for an `Initialize` snapshot.
    RequestState,

    /// The picker selected a color.
    ColorSelected {
        /// Hex color spec, e.g. `"#1e90ff"`.
        hex: String,
    },

    /// Short press on the control surface.
    Press,

    /// Long press on the control surface.
    LongPress,
}

impl From<UiToApp> for ControlEvent {
    fn from(msg: UiToApp) -> Self {
        match msg {
            UiToApp::RequestState => ControlEvent::RequestState,
            UiToApp::ColorSelected { hex } => ControlEvent::ColorSelected { hex },
            UiToApp::Press => ControlEvent::Press,
            UiToApp::LongPress => ControlEvent::LongPress,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::ControlSurface;

    #[test]
    fn test_parse_color_selected() {
        let msg: UiToApp =
            serde_json::from_str(r##"{"type":"ColorSelected","data":{"hex":"#1e90ff"}}"##)
                .unwrap();
        assert_eq!(
            ControlEvent::from(msg),
            ControlEvent::ColorSelected { hex: "#1e90ff".into() }
        );
    }

    #[test]
    fn test_parse_unit_variants() {
        let msg: UiToApp = serde_json::from_str(r#"{"type":"LongPress"}"#).unwrap();
        assert_eq!(msg, UiToApp::LongPress);
        let msg: UiToApp = serde_json::from_str(r#"{"type":"RequestState"}"#).unwrap();
        assert_eq!(ControlEvent::from(msg), ControlEvent::RequestState);
    }

    #[test]
    fn test_unknown_message_is_rejected() {
        assert!(serde_json::from_str::<UiToApp>(r#"{"type":"Reboot"}"#).is_err());
    }

    #[test]
    fn test_style_updated_shape() {
        let msg = AppToUi::StyleUpdated {
            style: RenderStyle {
                background: "#000000".into(),
                button_background: "rgba(50, 50, 50, 0.7)".into(),
                button_text: "#ffffff".into(),
                surface: ControlSurface::Expanded,
            },
        };
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["type"], "StyleUpdated");
        assert_eq!(json["data"]["style"]["background"], "#000000");
        assert_eq!(json["data"]["style"]["button_text"], "#ffffff");
        assert_eq!(json["data"]["style"]["surface"], "expanded");
    }
}
