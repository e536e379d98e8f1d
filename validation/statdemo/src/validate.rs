use serde::{Deserialize, Serialize};
use statdemo::prelude::*;
use std::error::Error;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize, Serialize)]
struct ValidationData {
    name: String,
    notes: String,
    #[serde(flatten)]
    case: Case,
    #[serde(skip_deserializing)]
    result: ResultData,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum Case {
    Regression { input: InputData },
    Distribution { params: DistributionParams },
}

#[derive(Debug, Deserialize, Serialize)]
struct InputData {
    x: Vec<f64>,
    y: Vec<f64>,
}

#[derive(Debug, Deserialize, Serialize)]
struct DistributionParams {
    n: usize,
    p: f64,
}

#[derive(Debug, Serialize, Default)]
struct ResultData {
    #[serde(skip_serializing_if = "Option::is_none")]
    fit: Option<LinearFit<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    binomial: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    poisson: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let input_dir = Path::new("../output/reference");
    let output_dir = Path::new("../output/statdemo");

    if !input_dir.exists() {
        eprintln!(
            "Input directory {:?} does not exist. Generate the reference cases first.",
            input_dir
        );
        return Ok(());
    }

    fs::create_dir_all(output_dir)?;

    for entry in fs::read_dir(input_dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) == Some("json") {
            println!("Processing {:?}", path.file_name().unwrap_or_default());
            process_file(&path, output_dir)?;
        }
    }

    Ok(())
}

fn process_file(input_path: &Path, output_dir: &Path) -> Result<(), Box<dyn Error>> {
    let file = fs::File::open(input_path)?;
    let mut data: ValidationData = serde_json::from_reader(file)?;

    match &data.case {
        Case::Regression { input } => {
            let outcome = fit_xy(&input.x, &input.y)?;
            data.result.fit = outcome.fitted().copied();
            data.result.summary = Some(regression_summary(&outcome, DEFAULT_PRECISION));
        }
        Case::Distribution { params } => {
            let pair = evaluate(params.n, params.p)?;
            data.result.binomial = Some(pair.binomial.iter().map(|e| e.probability).collect());
            data.result.poisson = Some(pair.poisson.iter().map(|e| e.probability).collect());
        }
    }

    let output_path = output_dir.join(input_path.file_name().unwrap_or_default());
    let output_json = serde_json::to_string_pretty(&data)?;
    fs::write(output_path, output_json)?;

    Ok(())
}
