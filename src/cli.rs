#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeomeanArgs {
    pub results_path: String,
}

impl GeomeanArgs {
    pub fn from_args(args: &[&str]) -> Result<Self, String> {
        let mut results_path = None;
        for arg in args.iter().skip(1) {
            match *arg {
                other if other.starts_with('-') => {
                    return Err(format!("unknown flag {other}"));
                }
                _ => {
                    if results_path.is_some() {
                        return Err("expected exactly one results file".to_string());
                    }
                    results_path = Some(arg.to_string());
                }
            }
        }
        results_path
            .map(|results_path| Self { results_path })
            .ok_or_else(|| "results file path is required".to_string())
    }

    pub fn help() -> &'static str {
        "Usage: geomean RESULTS_JSON\n"
    }
}
