use super::*;

#[test]
fn defaults_to_local_service_origin() {
    let args = Args::try_parse_from(["travel-assistant"]).expect("parse");
    let startup = StartupConfig::from_args(&args).expect("config");

    assert_eq!(startup.api_base, StartupConfig::default().api_base);
    assert_eq!(startup.api_base, "http://127.0.0.1:5000");
    assert!(!startup.ignore_stale_responses);
    assert!(args.log_filter.is_none());
}

#[test]
fn accepts_launch_time_overrides() {
    let args = Args::try_parse_from([
        "travel-assistant",
        "--api-base",
        "https://travel.example.com/",
        "--ignore-stale-responses",
        "--log-filter",
        "desktop_gui=debug",
    ])
    .expect("parse");
    let startup = StartupConfig::from_args(&args).expect("config");

    assert_eq!(startup.api_base, "https://travel.example.com");
    assert!(startup.ignore_stale_responses);
    assert_eq!(args.log_filter.as_deref(), Some("desktop_gui=debug"));
}

#[test]
fn rejects_unusable_api_base() {
    let args = Args::try_parse_from(["travel-assistant", "--api-base", "localhost:5000"])
        .expect("parse");
    assert!(StartupConfig::from_args(&args).is_err());
}
