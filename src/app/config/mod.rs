mod load_config;

pub use load_config::{DEFAULT_CONFIG_FILE, load_config, load_config_from_dir, load_dotenv};
