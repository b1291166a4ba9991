use clap::{Args, Command, FromArgMatches};

use cfgstruct::{BindError, BootstrapArgs, Config, FlagSet, Mode, bind};

#[derive(Config, Debug, Default)]
struct App {
    #[config(release_default = "info", dev_default = "debug")]
    log_level: String,
    #[config(default = "$CONFDIR/app.db")]
    database: String,
}

#[test]
fn scan_then_bind_then_parse() {
    let argv = ["--defaults=dev", "--config-dir", "/etc/app", "--database=/tmp/x.db"];

    let boot = BootstrapArgs::scan(argv).unwrap();
    assert_eq!(boot.defaults, Mode::Dev);

    let mut app = App::default();
    let matches = {
        let command = BootstrapArgs::augment_args(Command::new("app"));
        let mut flags = FlagSet::with_command(command);
        bind(&mut flags, &mut app, &boot.into_options()).unwrap();
        assert_eq!(
            flags.lookup("database").unwrap().def_value(),
            "/etc/app/app.db"
        );
        flags.parse(argv).unwrap()
    };

    assert_eq!(app.log_level, "debug");
    assert_eq!(app.database, "/tmp/x.db");

    let parsed = BootstrapArgs::from_arg_matches(&matches).unwrap();
    assert_eq!(parsed.defaults, Mode::Dev);
}

#[derive(Config, Debug, Default)]
struct ShadowsBootstrap {
    #[config(default = "x")]
    defaults: String,
}

#[test]
fn field_named_like_a_bootstrap_flag_fails_the_bind() {
    let mut config = ShadowsBootstrap::default();
    let command = BootstrapArgs::augment_args(Command::new("app"));
    let mut flags = FlagSet::with_command(command);
    let err = bind(&mut flags, &mut config, &BootstrapArgs::default().into_options()).unwrap_err();
    assert!(matches!(err, BindError::DuplicateFlag { ref name } if name == "defaults"));
    assert!(flags.is_empty());
}

#[derive(Config, Debug, Default)]
struct Identity {
    #[config(default = "$IDENTITYDIR/node.key")]
    key_path: String,
}

#[test]
fn identity_dir_flag_feeds_the_placeholder() {
    let boot = BootstrapArgs::scan(["--identity-dir", "/var/keys"]).unwrap();
    let mut config = Identity::default();
    {
        let mut flags = FlagSet::new("app");
        bind(&mut flags, &mut config, &boot.into_options()).unwrap();
    }
    assert_eq!(config.key_path, "/var/keys/node.key");
}
