use std::fs::File;
use std::io::Write;
use std::net::SocketAddr;
use std::thread::available_parallelism;
use crate::common::structs::custom_error::CustomError;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::database_entry_config::DatabaseEntryConfig;
use crate::config::structs::http_server_config::HttpServerConfig;
use crate::config::structs::models_config::ModelsConfig;
use crate::database::enums::dialect::Dialect;
use crate::database::structs::connection_options::ConnectionOptions;

pub const LOG_LEVELS: [&str; 6] = ["off", "trace", "debug", "info", "warn", "error"];
pub const LOG_LEVEL_ENV: &str = "MODELS_LOG_LEVEL";

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            http_server: HttpServerConfig {
                enabled: true,
                bind_address: String::from("127.0.0.1:8080"),
                threads: available_parallelism().map(|n| n.get() as u64).unwrap_or(1),
                keep_alive: 60,
                request_timeout: 15,
                disconnect_timeout: 15,
            },
            models: ModelsConfig {
                username: None,
                password: None,
                models_path: Some(String::from("models")),
                options: Some(ConnectionOptions {
                    dialect: Some(Dialect::sqlite3),
                    storage: Some(String::from("data.db")),
                    ..ConnectionOptions::default()
                }),
                databases: Some(vec![DatabaseEntryConfig {
                    database: String::from("main"),
                    models: Vec::new(),
                }]),
                connections: None,
            },
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => {
                match Self::load(data.as_slice()) {
                    Ok(cfg) => Ok(cfg),
                    Err(e) => Err(ConfigurationError::ParseError(e)),
                }
            }
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        match File::create(path) {
            Ok(mut file) => {
                match file.write_all(data.as_ref()) {
                    Ok(_) => Ok(()),
                    Err(e) => Err(ConfigurationError::IOError(e))
                }
            }
            Err(e) => Err(ConfigurationError::IOError(e))
        }
    }

    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, CustomError> {
        let mut config = match Configuration::load_file(path) {
            Ok(config) => config,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {}", error);

                if !create {
                    eprintln!("You can either create your own {} file, or start this app using '--create-config' as parameter.", path);
                    return Err(CustomError::new("will not create config file automatically"));
                }
                eprintln!("Creating config file..");

                let config_toml = match toml::to_string(&Configuration::init()) {
                    Ok(data) => data,
                    Err(e) => {
                        eprintln!("{e}");
                        return Err(CustomError::new("could not serialize default configuration"));
                    }
                };
                return match Configuration::save_file(path, config_toml) {
                    Ok(_) => {
                        eprintln!("Please edit {} and the model files it points to, exiting now...", path);
                        Err(CustomError::new("created config file"))
                    }
                    Err(e) => {
                        eprintln!("{} could not be created, check permissions...", path);
                        eprintln!("{e}");
                        Err(CustomError::new("could not create config file"))
                    }
                };
            }
        };

        config.apply_env_overrides();

        println!("[VALIDATE] Validating configuration...");
        if let Err(error) = config.validate() {
            eprintln!("[VALIDATE CONFIG] {}", error);
            return Err(CustomError::new("invalid configuration"));
        }
        Ok(config)
    }

    pub fn apply_env_overrides(&mut self) {
        if let Ok(level) = std::env::var(LOG_LEVEL_ENV) {
            if !level.is_empty() {
                self.log_level = level.to_lowercase();
            }
        }
    }

    /// Checks the host level settings; the models section is validated when
    /// the plugin registers.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let mut violations = Vec::new();
        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            violations.push(format!(
                "\"log_level\" must be one of [{}], got \"{}\"",
                LOG_LEVELS.join(", "),
                self.log_level
            ));
        }
        if self.http_server.enabled {
            if self.http_server.bind_address.parse::<SocketAddr>().is_err() {
                violations.push(format!(
                    "\"http_server.bind_address\" must be a socket address, got \"{}\"",
                    self.http_server.bind_address
                ));
            }
            if self.http_server.threads == 0 {
                violations.push(String::from("\"http_server.threads\" must be greater than 0"));
            }
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(ConfigurationError::invalid(violations))
        }
    }
}
