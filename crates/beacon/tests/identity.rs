use beacon::{home, FileIdentityProvider, StaticIdentityProvider, IDENTITY_FILE_NAME};
use camino::Utf8PathBuf;
use redirect_client::IdentityProvider;

#[test]
fn it_persists_the_identity_in_the_config_home() {
    let fixture = assert_fs::TempDir::new().unwrap();
    let override_home = Utf8PathBuf::try_from(fixture.path().join("redirect")).unwrap();
    let home = home::dir(Some(override_home)).expect("resolving home failed");

    let provider = FileIdentityProvider::from_home(&home).expect("loading identity failed");
    assert_eq!(provider.path(), home.join(IDENTITY_FILE_NAME).as_path());

    let stored = std::fs::read_to_string(provider.path()).unwrap();
    assert_eq!(provider.get_or_create_device_identity().as_ref(), stored);
}

#[test]
fn static_provider_returns_what_it_was_given() {
    let provider = StaticIdentityProvider::new("device-123");
    assert_eq!(
        provider.get_or_create_device_identity().to_string(),
        "device-123"
    );
}
