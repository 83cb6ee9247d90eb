use{
    serde::{Serialize, de::DeserializeOwned},
    serde_json::Value,
    std::{
        fs::File,
        io::BufReader,
        process::exit
    }
};

/// Reads the options file for a subcommand. Without a file an example
/// config (the Default impl of the param struct) is printed instead and
/// the program exits, so every command documents itself.
pub fn parse<T>(json: Option<&String>) -> (T, Value)
where T: Default + Serialize + DeserializeOwned
{
    match json {
        None => {
            let example = T::default();
            serde_json::to_writer_pretty(
                std::io::stdout(),
                &example
            ).expect("unable to write example json");
            println!();
            exit(0)
        },
        Some(file) => {
            let f = File::open(file)
                .expect("unable to open json file");
            let buf = BufReader::new(f);
            let json_value: Value = serde_json::from_reader(buf)
                .expect("unable to parse json");
            let param: T = serde_json::from_value(json_value.clone())
                .expect("invalid options");
            (param, json_value)
        }
    }
}
