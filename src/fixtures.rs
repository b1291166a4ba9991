#[cfg(test)]
pub mod test {
    use std::path::PathBuf;
    use std::time::Duration;

    use crate::Config;

    /// One field of every leaf kind, a nested struct and an array.
    #[derive(Config, Debug, Default, PartialEq)]
    pub struct Everything {
        #[config(default = "")]
        pub string: String,

        #[config(release_default = false, dev_default = true)]
        pub bool: bool,

        #[config(release_default = 0, dev_default = 1)]
        pub int64: i64,

        #[config(default = 0)]
        pub int: isize,

        #[config(default = 0)]
        pub uint64: u64,

        #[config(default = 0)]
        pub uint: usize,

        #[config(default = 0)]
        pub float64: f64,

        #[config(default = "0")]
        pub duration: Duration,

        #[config(default = "/var/lib/test")]
        pub path: PathBuf,

        pub nested: Nested,

        pub fields: [Field; 10],
    }

    #[derive(Config, Debug, Default, PartialEq)]
    pub struct Nested {
        #[config(default = "")]
        pub another_string: String,
    }

    #[derive(Config, Debug, Default, PartialEq)]
    pub struct Field {
        #[config(default = 0)]
        pub another_int: i32,
    }

    /// String-only leaves, with a `$CONFDIR` default inside an array.
    #[derive(Config, Debug, Default, PartialEq)]
    pub struct Peers {
        #[config(default = "node")]
        pub name: String,

        pub peers: [Peer; 3],
    }

    #[derive(Config, Debug, Default, PartialEq)]
    pub struct Peer {
        #[config(default = "localhost:7777")]
        pub address: String,

        #[config(default = "$CONFDIR/peer.crt")]
        pub cert: PathBuf,
    }
}
