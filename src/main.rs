// SPDX-License-Identifier: MPL-2.0
use gallery_admin::app::{self, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
gallery_admin - manage photo galleries

USAGE:
  gallery_admin [OPTIONS]

OPTIONS:
  --lang <LOCALE>        Interface language (e.g. en-US, fr)
  --api-url <URL>        Backend base URL [env: GALLERY_ADMIN_API_URL]
  --config-dir <DIR>     Configuration directory [env: GALLERY_ADMIN_CONFIG_DIR]
  -h, --help             Print this help
";

fn parse_args() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        api_url: args.opt_value_from_str("--api-url")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        eprintln!("Warning: unused arguments {rest:?}");
    }

    Ok(Some(flags))
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let flags = match parse_args() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("Error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    app::run(flags)
}
