use dotenvy::dotenv;
use lazy_static::lazy_static;
use std::env as std_env;

lazy_static! {
    pub static ref DATABASE_PATH: String =
        load_or_default(env::DATABASE_PATH_ENV_VAR, DEFAULT_DATABASE_PATH);
    pub static ref APP_ADDRESS: String =
        load_or_default(env::APP_ADDRESS_ENV_VAR, prod::APP_ADDRESS);
}

fn load_env() {
    dotenv().ok();
}

fn load_or_default(variable_name: &str, default_value: &str) -> String {
    load_env();

    match std_env::var(variable_name) {
        Ok(value) => {
            if value.is_empty() {
                String::from(default_value)
            } else {
                value
            }
        }
        Err(_) => String::from(default_value),
    }
}

pub mod env {
    pub const APP_ADDRESS_ENV_VAR: &str = "APP_ADDRESS";
    pub const DATABASE_PATH_ENV_VAR: &str = "DATABASE_PATH";
}

pub const DEFAULT_DATABASE_PATH: &str = "vehicles.db";

pub mod messages {
    pub const USER_CREATED: &str = "Usuário criado com sucesso";
    pub const EMAIL_ALREADY_REGISTERED: &str = "E-mail já registrado";
    pub const LOGIN_SUCCEEDED: &str = "Login bem-sucedido";
    pub const INVALID_CREDENTIALS: &str = "Credenciais inválidas";
    pub const VEHICLE_NOT_FOUND: &str = "Vehicle not found";
    pub const VEHICLE_DELETED: &str = "Vehicle deleted";
    pub const UNEXPECTED_ERROR: &str = "Unexpected error";
}

pub mod prod {
    pub const APP_ADDRESS: &str = "0.0.0.0:5000";
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
}
