use std::{env, fs, path::PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=OUT_DIR");

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let completions_dir = out_dir.join("completions");

    fs::create_dir_all(&completions_dir).unwrap();

    let mut cmd = clap::Command::new("jsonify")
        .version("1.0.0")
        .author("jsonify Contributors")
        .about("Convert XML, CSV and HTML content into JSON")
        .arg(clap::arg!(<INPUT> "Input file, or '-' for stdin"))
        .arg(
            clap::arg!(-f --format <FORMAT> "Input format (xml, csv, html)")
                .value_name("FORMAT")
                .value_parser(["xml", "csv", "html"]),
        )
        .arg(
            clap::arg!(-o --output <FILE> "Output file (default: stdout)")
                .value_name("FILE")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(clap::arg!(--raw "Print converter output without the result label"))
        .arg(clap::arg!(--escape "Escape quotes, backslashes and control characters"))
        .arg(clap::arg!(--pretty "Pretty-print the JSON output"))
        .arg(clap::arg!(-v --verbose "Enable debug logging"));

    clap_complete::generate_to(clap_complete::shells::Bash, &mut cmd, "jsonify", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Zsh, &mut cmd, "jsonify", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Fish, &mut cmd, "jsonify", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::PowerShell, &mut cmd, "jsonify", &completions_dir).unwrap();

    println!(
        "cargo:warning=Shell completions generated in: {}",
        completions_dir.display()
    );
}
