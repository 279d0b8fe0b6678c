//! Browser-safe view of the settings record.
//!
//! The frontend fetches the platform configuration on every page load to
//! render branding, theme, and registration UI.  Handing it the full
//! [`SystemSettings`] record would leak the SMTP credentials and the raw
//! email template bodies, so the HTTP layer serves this DTO instead.
//!
//! Any field added to [`PublicSettings`] must be mirrored in the frontend's
//! TypeScript interface to avoid runtime type mismatches.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::settings::SystemSettings;

/// Credential-redacted subset of [`SystemSettings`] served to browsers.
///
/// Deliberately absent: every `smtp*` field except the on/off flag, and the
/// email template bodies/headers (rendered server-side only).  The wire
/// names match the persisted document so the frontend needs one set of
/// identifiers, not two.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicSettings {
    // Identity / branding
    pub system_name: String,
    pub system_logo: String,
    pub system_slogan: String,
    pub system_summary: String,
    pub system_footer: String,
    pub system_favicon: String,
    #[serde(rename = "systemICP")]
    pub system_icp: String,
    pub system_organization: String,
    #[serde(rename = "systemOrganizationURL")]
    pub system_organization_url: String,

    // Theming
    pub theme_color: String,
    pub dark_mode_default: bool,
    pub allow_user_theme: bool,

    // Visual assets
    #[serde(rename = "fancyBackGroundIconWhite")]
    pub fancy_background_icon_white: String,
    #[serde(rename = "fancyBackGroundIconBlack")]
    pub fancy_background_icon_black: String,
    #[serde(rename = "defaultBGImage")]
    pub default_bg_image: String,
    pub svg_icon_light: String,
    pub svg_icon_dark: String,
    pub svg_alt_data: String,
    pub trophys_gold: String,
    pub trophys_silver: String,
    pub trophys_bronze: String,
    pub school_logo: String,
    pub school_small_icon: String,
    pub school_union_auth_text: String,
    #[serde(rename = "bgAnimation")]
    pub bg_animation: bool,
    #[serde(rename = "fancyBackGroundIconWidth")]
    pub fancy_background_icon_width: f64,
    #[serde(rename = "fancyBackGroundIconHeight")]
    pub fancy_background_icon_height: f64,

    /// Whether outbound mail is configured — the frontend uses this to show
    /// or hide "resend verification email" style actions.
    pub smtp_enabled: bool,

    // Policy flags
    pub captcha_enabled: bool,
    pub game_activity_mode: String,
    #[serde(rename = "aboutus")]
    pub about_us: String,
    pub account_activation_method: String,
    pub registration_enabled: bool,

    // Locale / operational
    pub default_language: String,
    pub time_zone: String,
    pub max_upload_size: u32,

    pub updated_time: DateTime<Utc>,
}

impl From<&SystemSettings> for PublicSettings {
    fn from(settings: &SystemSettings) -> Self {
        Self {
            system_name: settings.system_name.clone(),
            system_logo: settings.system_logo.clone(),
            system_slogan: settings.system_slogan.clone(),
            system_summary: settings.system_summary.clone(),
            system_footer: settings.system_footer.clone(),
            system_favicon: settings.system_favicon.clone(),
            system_icp: settings.system_icp.clone(),
            system_organization: settings.system_organization.clone(),
            system_organization_url: settings.system_organization_url.clone(),
            theme_color: settings.theme_color.clone(),
            dark_mode_default: settings.dark_mode_default,
            allow_user_theme: settings.allow_user_theme,
            fancy_background_icon_white: settings.fancy_background_icon_white.clone(),
            fancy_background_icon_black: settings.fancy_background_icon_black.clone(),
            default_bg_image: settings.default_bg_image.clone(),
            svg_icon_light: settings.svg_icon_light.clone(),
            svg_icon_dark: settings.svg_icon_dark.clone(),
            svg_alt_data: settings.svg_alt_data.clone(),
            trophys_gold: settings.trophys_gold.clone(),
            trophys_silver: settings.trophys_silver.clone(),
            trophys_bronze: settings.trophys_bronze.clone(),
            school_logo: settings.school_logo.clone(),
            school_small_icon: settings.school_small_icon.clone(),
            school_union_auth_text: settings.school_union_auth_text.clone(),
            bg_animation: settings.bg_animation,
            fancy_background_icon_width: settings.fancy_background_icon_width,
            fancy_background_icon_height: settings.fancy_background_icon_height,
            smtp_enabled: settings.smtp_enabled,
            captcha_enabled: settings.captcha_enabled,
            game_activity_mode: settings.game_activity_mode.clone(),
            about_us: settings.about_us.clone(),
            account_activation_method: settings.account_activation_method.clone(),
            registration_enabled: settings.registration_enabled,
            default_language: settings.default_language.clone(),
            time_zone: settings.time_zone.clone(),
            max_upload_size: settings.max_upload_size,
            updated_time: settings.updated_time,
        }
    }
}
