//! Tests for version checks and organization email lookup

use matsuri::core::services::{Version, find_org_email, latest_release_version};

use crate::common::{self, mocks::MockForge};

#[test]
fn test_latest_release_version() {
    let forge = MockForge::new().with_release("v1.4.0");
    let (settings, repo) = (common::settings(), common::repo());

    let latest = latest_release_version(common::session(&forge, &settings, &repo)).unwrap();

    assert_eq!(latest.to_string(), "1.4.0");
    assert!(Version::parse(matsuri::VERSION).unwrap() < latest);
}

#[test]
fn test_unparseable_release_tag() {
    let forge = MockForge::new().with_release("nightly");
    let (settings, repo) = (common::settings(), common::repo());

    let err = latest_release_version(common::session(&forge, &settings, &repo)).unwrap_err();
    assert_eq!(err.code(), "EXTRACTION_ERROR");
}

#[test]
fn test_org_email_from_forge() {
    use matsuri::core::ports::ForgeApi;

    let forge = MockForge::new()
        .with_email("taro@example.com", true)
        .with_email("taro@festivaljapon.com", false)
        .with_email("taro.yamada@festivaljapon.com", true);

    let emails = forge.list_user_emails().unwrap();
    assert_eq!(
        find_org_email(&emails, &common::settings().setup.email_domain),
        Some("taro.yamada@festivaljapon.com".to_string())
    );
    assert_eq!(find_org_email(&emails, "matsuri.example"), None);
}
