use crate::image_classifier::interface::Classification;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Joins relative paths onto the working directory without resolving links.
pub fn absolute(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }

    match std::env::current_dir() {
        Ok(cwd) => cwd.join(path),
        Err(_) => path.to_path_buf(),
    }
}

pub fn write_paths(
    out: &mut impl Write,
    model_path: &Path,
    labels_path: &Path,
    image_path: &Path,
) -> io::Result<()> {
    writeln!(out, "Model:  {}", absolute(model_path).display())?;
    writeln!(out, "Labels: {}", absolute(labels_path).display())?;
    writeln!(out, "Image:  {}", absolute(image_path).display())?;
    Ok(())
}

pub fn write_predictions(
    out: &mut impl Write,
    top_k: usize,
    classifications: &[Classification],
) -> io::Result<()> {
    writeln!(out, "=== Top-{} Predictions ===", top_k)?;
    for (rank, classification) in classifications.iter().enumerate() {
        writeln!(
            out,
            "{}) {} : {:.4}",
            rank + 1,
            classification.label,
            classification.confidence
        )?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prediction_lines() {
        let classifications = vec![
            Classification {
                index: 207,
                label: "golden_retriever".to_string(),
                confidence: 0.81234,
            },
            Classification {
                index: 9999,
                label: "class_9999".to_string(),
                confidence: 0.00016,
            },
        ];
        let mut out = Vec::new();

        write_predictions(&mut out, 2, &classifications).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "=== Top-2 Predictions ===\n1) golden_retriever : 0.8123\n2) class_9999 : 0.0002\n"
        );
    }

    #[test]
    fn test_paths_are_absolute() {
        let mut out = Vec::new();

        write_paths(
            &mut out,
            Path::new("models/resnet50.onnx"),
            Path::new("/srv/labels.json"),
            Path::new("cat.jpg"),
        )
        .unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Model:  "));
        assert!(Path::new(&lines[0]["Model:  ".len()..]).is_absolute());
        assert!(lines[0].ends_with("resnet50.onnx"));
        assert_eq!(lines[1], "Labels: /srv/labels.json");
        assert!(lines[2].starts_with("Image:  "));
        assert!(lines[2].ends_with("cat.jpg"));
    }
}
