use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocumentParseError {
    #[error("Failed to parse PDF: {0}")]
    Malformed(String),
}

/// Extracts the text of every page from an in-memory PDF, normalized for
/// chunking: newlines become spaces, whitespace runs collapse to a single
/// space, leading and trailing whitespace is trimmed.
///
/// Pages come back in document order; downstream consumers number them
/// from 1. Parser state lives only for the duration of the call.
pub fn extract_pages(bytes: &[u8]) -> Result<Vec<String>, DocumentParseError> {
    let pages = pdf_extract::extract_text_from_mem_by_pages(bytes)
        .map_err(|e| DocumentParseError::Malformed(e.to_string()))?;
    Ok(pages.iter().map(|page| normalize(page)).collect())
}

fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
pub(crate) mod testing {
    /// Builds a minimal well-formed PDF with one line of Helvetica text per
    /// page. Object offsets and the xref table are computed, not hard-coded,
    /// so the output survives a strict reader.
    pub(crate) fn pdf_with_pages(pages: &[&str]) -> Vec<u8> {
        let mut objects: Vec<String> = Vec::new();
        let kids: Vec<String> = (0..pages.len())
            .map(|i| format!("{} 0 R", 3 + 2 * i))
            .collect();
        objects.push("1 0 obj\n<< /Type /Catalog /Pages 2 0 R >>\nendobj\n".to_string());
        objects.push(format!(
            "2 0 obj\n<< /Type /Pages /Kids [{}] /Count {} >>\nendobj\n",
            kids.join(" "),
            pages.len()
        ));
        for (i, text) in pages.iter().enumerate() {
            let page_id = 3 + 2 * i;
            let content_id = 4 + 2 * i;
            objects.push(format!(
                "{page_id} 0 obj\n<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
                 /Resources << /Font << /F1 << /Type /Font /Subtype /Type1 \
                 /BaseFont /Helvetica >> >> >> /Contents {content_id} 0 R >>\nendobj\n"
            ));
            let stream = format!("BT /F1 12 Tf 72 720 Td ({text}) Tj ET");
            objects.push(format!(
                "{content_id} 0 obj\n<< /Length {} >>\nstream\n{stream}\nendstream\nendobj\n",
                stream.len()
            ));
        }

        let mut out = b"%PDF-1.4\n".to_vec();
        let mut offsets = Vec::with_capacity(objects.len());
        for object in &objects {
            offsets.push(out.len());
            out.extend_from_slice(object.as_bytes());
        }
        let xref_offset = out.len();
        out.extend_from_slice(format!("xref\n0 {}\n", objects.len() + 1).as_bytes());
        out.extend_from_slice(b"0000000000 65535 f \n");
        for offset in offsets {
            out.extend_from_slice(format!("{offset:010} 00000 n \n").as_bytes());
        }
        out.extend_from_slice(
            format!(
                "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_offset}\n%%EOF",
                objects.len() + 1
            )
            .as_bytes(),
        );
        out
    }
}
