use crate::Result;
use crate::facts::ArtifactRef;
use ohno::{EnrichableExt, bail};

/// Fields on each line: code URL, dataset URL, model URL
const FIELDS_PER_LINE: usize = 3;

/// Parse a URL file into artifact references, in file order.
///
/// Every line is validated before anything is returned, so a bad line anywhere in the
/// file fails the whole parse. Blank lines are skipped and fields are trimmed.
pub fn parse_artifacts(text: &str) -> Result<Vec<ArtifactRef>> {
    let mut artifacts = Vec::new();

    for (index, line) in text.lines().enumerate() {
        let line_no = index + 1;
        if line.trim().is_empty() {
            continue;
        }

        let artifact = parse_line(line).map_err(|e| e.enrich_with(|| format!("line {line_no}")))?;
        artifacts.push(artifact);
    }

    Ok(artifacts)
}

fn parse_line(line: &str) -> Result<ArtifactRef> {
    let fields: Vec<_> = line.split(',').map(str::trim).collect();

    if fields.len() > FIELDS_PER_LINE {
        bail!("expected at most {FIELDS_PER_LINE} comma-separated fields, found {}", fields.len());
    }

    let [code_url, dataset_url, model_url] = fields.as_slice() else {
        bail!("must have a model URL");
    };

    if model_url.is_empty() {
        bail!("must have a model URL");
    }

    ArtifactRef::from_urls(code_url, dataset_url, model_url)
}
