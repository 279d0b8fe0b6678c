//! The system-settings record and its compiled-in defaults.
//!
//! [`SystemSettings`] is the complete, flat set of configurable platform
//! parameters.  Exactly one logical record exists per deployment; it is
//! replaced wholesale on every update, never patched field by field.
//!
//! # Wire names
//!
//! The persisted JSON document uses stable camelCase identifiers that
//! pre-date this implementation and are shared with the browser frontend,
//! so they must never change.  `#[serde(rename_all = "camelCase")]` covers
//! most fields; the handful of historical oddballs (`systemICP`,
//! `defaultBGImage`, `fancyBackGroundIconWhite`, `aboutus`, ...) carry an
//! explicit `#[serde(rename = "...")]`.
//!
//! # Serde default values (for beginners)
//!
//! The struct-level `#[serde(default)]` attribute tells serde to build a
//! `SystemSettings::default()` first and only overwrite the fields that are
//! actually present in the document.  A hand-edited or partially-upgraded
//! settings file therefore keeps the documented defaults for whatever it
//! omits, instead of silently collapsing those fields to empty strings and
//! zeroes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The complete, flat settings record for one platform deployment.
///
/// Every field has a production-safe default, so the record is always fully
/// populated — there are no required fields.  The record is `Clone` because
/// the store hands out snapshots rather than references into its cache.
///
/// # Security note
///
/// `smtp_password` is stored in plaintext in the persisted document (at-rest
/// encryption is out of scope for this layer).  It must never be exposed
/// through the browser-facing surface; see
/// [`PublicSettings`](crate::domain::public::PublicSettings).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SystemSettings {
    // ── Identity / branding ───────────────────────────────────────────────

    /// Display name shown in the navbar, page titles, and emails.
    pub system_name: String,
    /// URL or path of the logo image; empty means "use the built-in logo".
    pub system_logo: String,
    /// Short slogan rendered on the landing page.
    pub system_slogan: String,
    /// Longer summary text for the landing page.
    pub system_summary: String,
    /// Footer line rendered on every page.
    pub system_footer: String,
    /// URL or path of the favicon; empty means "use the built-in favicon".
    pub system_favicon: String,
    /// Legal filing number shown in the footer (`"None"` hides it).
    #[serde(rename = "systemICP")]
    pub system_icp: String,
    /// Operating organization name.
    pub system_organization: String,
    /// Link target for the organization name.
    #[serde(rename = "systemOrganizationURL")]
    pub system_organization_url: String,

    // ── Theming ───────────────────────────────────────────────────────────

    /// Accent color identifier understood by the frontend theme.
    pub theme_color: String,
    /// Whether new visitors start in dark mode.
    pub dark_mode_default: bool,
    /// Whether end users may override the theme for themselves.
    pub allow_user_theme: bool,

    // ── Visual assets ─────────────────────────────────────────────────────

    /// Decorative background icon, variant for dark backgrounds.
    #[serde(rename = "fancyBackGroundIconWhite")]
    pub fancy_background_icon_white: String,
    /// Decorative background icon, variant for light backgrounds.
    #[serde(rename = "fancyBackGroundIconBlack")]
    pub fancy_background_icon_black: String,
    /// Default page background image.
    #[serde(rename = "defaultBGImage")]
    pub default_bg_image: String,
    /// SVG brand icon used on light backgrounds.
    pub svg_icon_light: String,
    /// SVG brand icon used on dark backgrounds.
    pub svg_icon_dark: String,
    /// `alt` text for the SVG brand icons.
    pub svg_alt_data: String,
    /// Scoreboard trophy image, first place.
    pub trophys_gold: String,
    /// Scoreboard trophy image, second place.
    pub trophys_silver: String,
    /// Scoreboard trophy image, third place.
    pub trophys_bronze: String,
    /// School / sponsor logo shown on the union-auth login page.
    pub school_logo: String,
    /// Small school icon shown next to the union-auth button.
    pub school_small_icon: String,
    /// Label text on the union-auth login button.
    pub school_union_auth_text: String,
    /// Whether the animated background is enabled.
    #[serde(rename = "bgAnimation")]
    pub bg_animation: bool,
    /// Rendered width of the decorative background icon, in CSS pixels.
    #[serde(rename = "fancyBackGroundIconWidth")]
    pub fancy_background_icon_width: f64,
    /// Rendered height of the decorative background icon, in CSS pixels.
    #[serde(rename = "fancyBackGroundIconHeight")]
    pub fancy_background_icon_height: f64,

    // ── Outbound mail (SMTP) ──────────────────────────────────────────────

    /// SMTP server hostname; empty until an administrator configures mail.
    pub smtp_host: String,
    /// SMTP server port.
    pub smtp_port: u16,
    /// SMTP authentication user.
    pub smtp_username: String,
    /// SMTP authentication password, stored in plaintext (see type docs).
    pub smtp_password: String,
    /// Display name used in the `From:` header.
    pub smtp_name: String,
    /// Connection-security mode: `"none"`, `"tls"`, or `"starttls"`.
    pub smtp_port_type: String,
    /// Envelope / header from-address.
    pub smtp_from: String,
    /// Master switch for outbound mail.
    pub smtp_enabled: bool,

    // ── Email templates ───────────────────────────────────────────────────
    //
    // Template bodies are opaque to this layer; the mail-rendering
    // collaborator interprets them.

    /// Body template for the address-verification email.
    pub verify_email_template: String,
    /// Subject line for the address-verification email.
    pub verify_email_header: String,
    /// Body template for the password-reset email.
    pub forget_password_template: String,
    /// Subject line for the password-reset email.
    pub forget_password_header: String,

    // ── Policy flags ──────────────────────────────────────────────────────

    /// Whether the proof-of-work challenge gates login/registration.
    pub captcha_enabled: bool,
    /// Competition activity mode identifier interpreted by the game module.
    pub game_activity_mode: String,
    /// Free-text "about us" content.
    #[serde(rename = "aboutus")]
    pub about_us: String,
    /// Account activation method identifier (e.g. `"email"`, `"auto"`).
    pub account_activation_method: String,
    /// Whether public self-registration is open.
    pub registration_enabled: bool,

    // ── Locale / operational ──────────────────────────────────────────────

    /// Default UI language tag.
    pub default_language: String,
    /// IANA time-zone name used for schedule display.
    pub time_zone: String,
    /// Maximum attachment/upload size in MiB.
    pub max_upload_size: u32,

    // ── Provenance ────────────────────────────────────────────────────────

    /// When the record was last saved (UTC).
    ///
    /// Stamped by the store on every save; any caller-supplied value is
    /// discarded.
    pub updated_time: DateTime<Utc>,
}

impl Default for SystemSettings {
    /// The compiled-in default record: production-safe values for a fresh
    /// deployment.  Registration and the proof-of-work challenge are on,
    /// dark mode is on, and SMTP is present but disabled (neutral `"none"`
    /// port-security mode on port 25) until an administrator fills it in.
    fn default() -> Self {
        Self {
            system_name: "A1CTF".to_string(),
            system_logo: String::new(),
            system_slogan: "A Modern CTF Platform".to_string(),
            system_summary: String::new(),
            system_footer: "© 2025 A1CTF Team".to_string(),
            system_favicon: String::new(),
            system_icp: "None".to_string(),
            system_organization: "A1CTF".to_string(),
            system_organization_url: "https://github.com/carbofish/A1CTF".to_string(),

            theme_color: "blue".to_string(),
            dark_mode_default: true,
            allow_user_theme: true,

            fancy_background_icon_white: "/images/ctf_white.png".to_string(),
            fancy_background_icon_black: "/images/ctf_black.png".to_string(),
            default_bg_image: "/images/defaultbg.jpg".to_string(),
            svg_icon_light: "/images/A1natas.svg".to_string(),
            svg_icon_dark: "/images/A1natas_white.svg".to_string(),
            svg_alt_data: "A1natas".to_string(),
            trophys_gold: "/images/trophys/gold_trophy.png".to_string(),
            trophys_silver: "/images/trophys/silver_trophy.png".to_string(),
            trophys_bronze: "/images/trophys/copper_trophy.png".to_string(),
            school_logo: "/images/A1natas.svg".to_string(),
            school_small_icon: "/images/A1natas.svg".to_string(),
            school_union_auth_text: "Union Auth".to_string(),
            bg_animation: false,
            fancy_background_icon_width: 241.2,
            fancy_background_icon_height: 122.39,

            smtp_host: String::new(),
            smtp_port: 25,
            smtp_username: String::new(),
            smtp_password: String::new(),
            smtp_name: String::new(),
            smtp_port_type: "none".to_string(),
            smtp_from: String::new(),
            smtp_enabled: false,

            verify_email_template: String::new(),
            verify_email_header: String::new(),
            forget_password_template: String::new(),
            forget_password_header: String::new(),

            captcha_enabled: true,
            game_activity_mode: String::new(),
            about_us: "A1CTF Platform".to_string(),
            account_activation_method: "email".to_string(),
            registration_enabled: true,

            default_language: "zh-CN".to_string(),
            time_zone: "Asia/Shanghai".to_string(),
            max_upload_size: 10,

            updated_time: Utc::now(),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── Defaults ──────────────────────────────────────────────────────────────

    #[test]
    fn test_defaults_carry_documented_production_values() {
        let settings = SystemSettings::default();

        assert_eq!(settings.system_name, "A1CTF");
        assert_eq!(settings.system_slogan, "A Modern CTF Platform");
        assert_eq!(settings.theme_color, "blue");
        assert!(settings.dark_mode_default);
        assert!(settings.registration_enabled);
        assert!(settings.captcha_enabled);
        assert_eq!(settings.account_activation_method, "email");
    }

    #[test]
    fn test_defaults_leave_smtp_disabled_and_neutral() {
        let settings = SystemSettings::default();

        assert!(!settings.smtp_enabled);
        assert_eq!(settings.smtp_port, 25);
        assert_eq!(settings.smtp_port_type, "none");
        assert!(settings.smtp_host.is_empty());
        assert!(settings.smtp_password.is_empty());
    }

    #[test]
    fn test_defaults_include_decorative_icon_dimensions() {
        let settings = SystemSettings::default();
        assert_eq!(settings.fancy_background_icon_width, 241.2);
        assert_eq!(settings.fancy_background_icon_height, 122.39);
    }

    // ── Wire names ────────────────────────────────────────────────────────────

    #[test]
    fn test_serialized_document_uses_stable_camel_case_keys() {
        let value =
            serde_json::to_value(SystemSettings::default()).expect("serialize defaults");
        let object = value.as_object().expect("top-level object");

        for key in [
            "systemName",
            "systemICP",
            "systemOrganizationURL",
            "themeColor",
            "fancyBackGroundIconWhite",
            "defaultBGImage",
            "svgIconLight",
            "bgAnimation",
            "fancyBackGroundIconWidth",
            "smtpHost",
            "smtpPortType",
            "aboutus",
            "registrationEnabled",
            "maxUploadSize",
            "updatedTime",
        ] {
            assert!(object.contains_key(key), "missing wire key {key}");
        }

        // Internal snake_case names must never leak into the document.
        assert!(!object.contains_key("system_name"));
        assert!(!object.contains_key("about_us"));
    }

    #[test]
    fn test_updated_time_serializes_as_rfc3339_utc() {
        let value =
            serde_json::to_value(SystemSettings::default()).expect("serialize defaults");
        let stamp = value["updatedTime"].as_str().expect("string timestamp");

        // RFC-3339 parses back and is expressed in UTC.
        let parsed: DateTime<Utc> = stamp.parse().expect("parse RFC-3339");
        assert!(stamp.ends_with('Z') || stamp.contains("+00:00"));
        assert!((Utc::now() - parsed).num_seconds().abs() < 60);
    }

    // ── Missing-field merge behaviour ─────────────────────────────────────────

    #[test]
    fn test_partial_document_merges_over_named_defaults() {
        // Only two keys present: everything else must come from
        // `SystemSettings::default()`, not from type zero values.
        let partial = r#"{ "systemName": "Edited CTF", "smtpPort": 587 }"#;

        let settings: SystemSettings = serde_json::from_str(partial).expect("parse partial");

        assert_eq!(settings.system_name, "Edited CTF");
        assert_eq!(settings.smtp_port, 587);
        // Untouched fields keep the documented defaults.
        assert_eq!(settings.system_slogan, "A Modern CTF Platform");
        assert_eq!(settings.theme_color, "blue");
        assert!(settings.registration_enabled);
        assert_eq!(settings.time_zone, "Asia/Shanghai");
    }

    #[test]
    fn test_round_trip_preserves_every_field() {
        let mut original = SystemSettings::default();
        original.system_name = "Round Trip".to_string();
        original.smtp_enabled = true;
        original.max_upload_size = 128;
        original.bg_animation = true;

        let json = serde_json::to_string(&original).expect("serialize");
        let restored: SystemSettings = serde_json::from_str(&json).expect("deserialize");

        assert_eq!(original, restored);
    }

    #[test]
    fn test_malformed_document_fails_to_parse() {
        let result = serde_json::from_str::<SystemSettings>("{ not json at all");
        assert!(result.is_err());
    }
}
