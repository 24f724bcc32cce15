//! Value parsers for CLI arguments clap cannot check on its own

use std::net::IpAddr;
use std::path::PathBuf;

/// Longest DNS name accepted for `--host`
const MAX_HOSTNAME_LEN: usize = 253;

const MAX_ROLLBACK_STEPS: u32 = 100;

pub fn validate_port(port_str: &str) -> Result<u16, String> {
    match port_str.parse::<u16>() {
        Ok(0) => Err("Port must be between 1 and 65535. Port 0 is not allowed.".to_string()),
        Ok(port) => Ok(port),
        Err(_) => Err(format!(
            "Port must be a valid number between 1 and 65535, got: '{}'",
            port_str
        )),
    }
}

/// The configuration file must exist and be a readable regular file.
pub fn validate_config_file_path(path_str: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(path_str);

    if !path.exists() {
        return Err(format!("Configuration file does not exist: '{}'", path_str));
    }

    if !path.is_file() {
        return Err(format!("Configuration path is not a file: '{}'", path_str));
    }

    std::fs::File::open(&path)
        .map(|_| path)
        .map_err(|e| format!("Cannot read configuration file '{}': {}", path_str, e))
}

pub fn validate_rollback_steps(steps_str: &str) -> Result<u32, String> {
    let steps: u32 = steps_str.parse().map_err(|_| {
        format!(
            "Rollback steps must be a valid positive number, got: '{}'",
            steps_str
        )
    })?;

    match steps {
        0 => Err("Rollback steps must be greater than 0".to_string()),
        n if n > MAX_ROLLBACK_STEPS => Err(format!(
            "Rollback steps cannot exceed {}",
            MAX_ROLLBACK_STEPS
        )),
        n => Ok(n),
    }
}

/// Accepts IP literals and plausible hostnames.
pub fn validate_host_address(host_str: &str) -> Result<String, String> {
    let host = host_str.trim();

    if host.is_empty() {
        return Err("Host address cannot be empty".to_string());
    }

    if host.contains(char::is_whitespace) {
        return Err("Host address cannot contain spaces".to_string());
    }

    if host.parse::<IpAddr>().is_ok() {
        return Ok(host.to_string());
    }

    // Dotted digits that failed to parse as an address
    if host.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return Err(format!("Invalid IPv4 address format: '{}'", host_str));
    }

    if host.len() > MAX_HOSTNAME_LEN {
        return Err(format!(
            "Host address is too long (maximum {} characters)",
            MAX_HOSTNAME_LEN
        ));
    }

    Ok(host.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_port_validation() {
        for port in ["1", "80", "8080", "65535"] {
            assert!(validate_port(port).is_ok(), "Port {port} should be valid");
        }
        for port in ["0", "65536", "abc", "-1", ""] {
            assert!(validate_port(port).is_err(), "Port '{port}' should be invalid");
        }
    }

    #[test]
    fn test_host_validation_valid_hosts() {
        for host in [
            "localhost",
            "127.0.0.1",
            "0.0.0.0",
            "::1",
            "192.168.1.1",
            "atlas.internal",
            "db-primary.local",
        ] {
            assert!(validate_host_address(host).is_ok(), "Host {host} should be valid");
        }
    }

    #[test]
    fn test_host_validation_invalid_hosts() {
        let too_long = "x".repeat(300);
        for host in ["", "   ", "host with spaces", "999.999.999.999", too_long.as_str()] {
            assert!(validate_host_address(host).is_err(), "Host '{host}' should be invalid");
        }
    }

    #[test]
    fn test_rollback_steps_validation() {
        for steps in ["1", "5", "100"] {
            assert!(validate_rollback_steps(steps).is_ok(), "Steps {steps} should be valid");
        }
        for steps in ["0", "101", "-1", "abc", ""] {
            assert!(validate_rollback_steps(steps).is_err(), "Steps '{steps}' should be invalid");
        }
    }

    #[test]
    fn test_config_file_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server]").unwrap();
        let path = file.path().to_str().unwrap();
        assert_eq!(validate_config_file_path(path).unwrap(), file.path());

        let dir = tempfile::tempdir().unwrap();
        let err = validate_config_file_path(dir.path().to_str().unwrap()).unwrap_err();
        assert!(err.contains("not a file"));

        let missing = dir.path().join("missing.toml");
        let err = validate_config_file_path(missing.to_str().unwrap()).unwrap_err();
        assert!(err.contains("does not exist"));
    }
}
