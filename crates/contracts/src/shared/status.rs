//! Badge tone for the status-like values the backend returns.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Primary,
    Warning,
    Neutral,
    Error,
    Teal,
    Info,
    Orange,
    Violet,
}

impl Tone {
    pub fn css_class(&self) -> &'static str {
        match self {
            Tone::Success => "badge--success",
            Tone::Primary => "badge--primary",
            Tone::Warning => "badge--warning",
            Tone::Neutral => "badge--neutral",
            Tone::Error => "badge--error",
            Tone::Teal => "badge--teal",
            Tone::Info => "badge--info",
            Tone::Orange => "badge--orange",
            Tone::Violet => "badge--violet",
        }
    }
}

pub fn tone_for(status: &str) -> Tone {
    match status {
        "available" | "active" => Tone::Success,
        "assigned" | "fixed_asset" => Tone::Primary,
        "under_repair" | "fair" => Tone::Warning,
        "disposed" | "returned" => Tone::Neutral,
        "lost" | "inactive" | "damaged" => Tone::Error,
        "new" => Tone::Teal,
        "good" | "employee" => Tone::Info,
        "poor" => Tone::Orange,
        "consumable" | "system_administrator" => Tone::Violet,
        _ => Tone::Neutral,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_statuses() {
        assert_eq!(tone_for("available"), Tone::Success);
        assert_eq!(tone_for("assigned"), Tone::Primary);
        assert_eq!(tone_for("under_repair"), Tone::Warning);
        assert_eq!(tone_for("lost"), Tone::Error);
        assert_eq!(tone_for("new"), Tone::Teal);
        assert_eq!(tone_for("system_administrator"), Tone::Violet);
    }

    #[test]
    fn test_unknown_is_neutral() {
        assert_eq!(tone_for("whatever"), Tone::Neutral);
        assert_eq!(tone_for(""), Tone::Neutral);
        assert_eq!(tone_for("whatever").css_class(), "badge--neutral");
    }
}
