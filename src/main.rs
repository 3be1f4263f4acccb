use std::sync::Arc;

use appstrings::{StringId, Translator, global};
use clap::{Arg, ArgAction, Command};
use tracing::info;
use tracing_subscriber::EnvFilter;

const DOMAIN: &str = "appstrings.example";

const TEST: StringId<'static> = StringId::new("TEST", "Hello world!");

const ES_MX: &str = r#"{
    "@metadata": { "lang": "es_MX", "domain": "appstrings.example" },
    "TEST": "¡Hola mundo!"
}"#;

fn example_translators() -> appstrings::Result<Vec<Arc<Translator>>> {
    let en = Translator::new("EN")
        .with_lang("en")
        .with_metadata("domain", DOMAIN)
        .with_string(TEST.key(), TEST.default_text());
    let es_mx = Translator::from_json("ES_MX", ES_MX)?;
    Ok(vec![Arc::new(en), Arc::new(es_mx)])
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = Command::new("appstrings")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Print the example greeting for a locale")
        .arg(
            Arg::new("locale")
                .long("locale")
                .short('l')
                .help("Locale to translate to, as LL or LL_RR (default: host locale)"),
        )
        .arg(
            Arg::new("list")
                .long("list")
                .help("List the installed translators")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("With --list, print the translators as JSON")
                .requires("list")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log locale detection and translator resolution")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let level = if matches.get_flag("verbose") { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.parse()?))
        .with_writer(std::io::stderr)
        .init();

    for translator in example_translators()? {
        global::install(translator)?;
    }

    let locale = matches.get_one::<String>("locale").map(String::as_str);
    global::set_locale(locale)?;

    if matches.get_flag("list") {
        let installed = global::list_installed();
        if matches.get_flag("json") {
            let listing: Vec<_> = installed
                .iter()
                .map(|t| serde_json::json!({ "name": t.name(), "translator": t.as_ref() }))
                .collect();
            println!("{}", serde_json::to_string_pretty(&listing)?);
        } else {
            for translator in &installed {
                println!(
                    "{}\t{}",
                    translator.name(),
                    translator.lang().unwrap_or_default()
                );
            }
        }
        return Ok(());
    }

    let resolved = global::with_state(|state| state.resolved());
    info!(
        translator = resolved.as_ref().map(|t| t.name()).unwrap_or("<none>"),
        "translating"
    );

    println!("Locale '{}': {}", global::get_locale(), global::lookup(TEST));

    Ok(())
}
