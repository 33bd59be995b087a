use std::fs;

use tempfile::TempDir;

use tool_locator::locator::resolver::Resolver;
use tool_locator::system::paths::EnvSearchPaths;
use tool_locator::system::probe::CommandProbe;
use tool_locator::system::repository::DirectoryRepository;

fn empty_search_paths() -> EnvSearchPaths {
    // a single entry that exists nowhere
    EnvSearchPaths::from_value("/nonexistent/tool-locator-tests")
}

#[test]
fn default_request_resolves_to_repository_package() {
    let temp_dir = TempDir::new().unwrap();
    let package_dir = temp_dir.path().join("mytool/3.6.4111459");
    fs::create_dir_all(&package_dir).unwrap();

    let repository = DirectoryRepository::new(temp_dir.path(), "mytool");
    let probe = CommandProbe::new("mytool");
    let search_paths = empty_search_paths();

    let resolution = Resolver::new(&repository, &probe, &search_paths).resolve(None, None);

    assert_eq!(resolution.outcome, Ok(package_dir));
    assert!(resolution.diagnostics.errors().is_empty());
    assert!(resolution.diagnostics.warnings().is_empty());
}

#[test]
fn explicit_request_without_matching_package_fails_with_rejections() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir_all(temp_dir.path().join("mytool/3.6.4111459")).unwrap();

    let repository = DirectoryRepository::new(temp_dir.path(), "mytool");
    let probe = CommandProbe::new("mytool");
    let search_paths = empty_search_paths();

    let resolution =
        Resolver::new(&repository, &probe, &search_paths).resolve(Some("3.10.2"), None);

    let failure = resolution.outcome.unwrap_err();
    assert!(failure.message.starts_with(
        "Tool '3.10.2' was not found in PATH or by override property."
    ));
    assert!(failure
        .message
        .contains("- '3.6.4111459' found in repository was not the requested version '3.10.2'."));
}

#[cfg(unix)]
fn install_fake_tool(dir: &std::path::Path, version: &str) {
    use std::os::unix::fs::PermissionsExt;

    fs::create_dir_all(dir).unwrap();
    let binary = dir.join("mytool");
    fs::write(&binary, format!("#!/bin/sh\necho \"mytool version {version}\"\n")).unwrap();
    fs::set_permissions(&binary, fs::Permissions::from_mode(0o755)).unwrap();
}

#[cfg(unix)]
#[test]
fn matching_override_is_used_without_a_repository() {
    let temp_dir = TempDir::new().unwrap();
    let override_dir = temp_dir.path().join("tool-install");
    install_fake_tool(&override_dir.join("bin"), "3.12.0");

    let repository = DirectoryRepository::new(temp_dir.path().join("no-such-repo"), "mytool");
    let probe = CommandProbe::new("mytool");
    let search_paths = empty_search_paths();

    let resolution = Resolver::new(&repository, &probe, &search_paths)
        .resolve(Some("3.12.0"), Some(&override_dir));

    assert_eq!(resolution.outcome, Ok(override_dir));
    assert!(resolution.diagnostics.errors().is_empty());
}

#[cfg(unix)]
#[test]
fn requested_version_is_found_on_the_search_path() {
    let temp_dir = TempDir::new().unwrap();
    let install_dir = temp_dir.path().join("tool-install");
    let bin_dir = install_dir.join("bin");
    install_fake_tool(&bin_dir, "3.12.0");

    let repository = DirectoryRepository::new(temp_dir.path().join("no-such-repo"), "mytool");
    let probe = CommandProbe::new("mytool");
    let search_paths = EnvSearchPaths::from_value(bin_dir.as_os_str());

    let resolution =
        Resolver::new(&repository, &probe, &search_paths).resolve(Some("3.12.0"), None);

    // the install directory is the entry's parent, never the bin directory
    assert_eq!(resolution.outcome, Ok(install_dir));
    assert!(resolution.diagnostics.warnings().is_empty());
}
