use crate::chunk::Chunk;

const INSTRUCTIONS: &str = "Instructions: Compose a comprehensive reply to the query using the search results given. \
Cite each reference using [Page Number] notation (every result has this number at the beginning). \
Citation is done at the end of each sentence. The format of citation is '[number]' (for example, [25]). \
If the search results mention multiple subjects with the same name, \
create separate answers for each. Only include information found in the results and \
do not add any additional information. Make sure the answer is correct and do not output false content. \
If the text does not relate to the query, simply state 'I could not find an answer'. Ignore outlier \
search results which has nothing to do with the question. Only answer what is asked. The \
answer should be short and concise. Answer step by step.\n\n";

/// Assembles the grounded prompt: the retrieved chunks under a
/// `Search results:` header, the citation and grounding instruction block,
/// then the question itself. Pure string assembly.
#[must_use]
pub fn build_prompt(question: &str, chunks: &[Chunk]) -> String {
    let mut prompt = String::from("Search results:\n\n");
    for chunk in chunks {
        prompt.push_str(&chunk.to_string());
        prompt.push_str("\n\n");
    }
    prompt.push_str(INSTRUCTIONS);
    prompt.push_str(&format!("Query: {question}\nAnswer:"));
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunk(page: usize, text: &str) -> Chunk {
        Chunk {
            page,
            text: text.to_string(),
        }
    }

    #[test]
    fn carries_chunks_verbatim_between_header_and_instructions() {
        let chunks = vec![chunk(1, "alpha beta"), chunk(3, "gamma delta")];
        let prompt = build_prompt("where is alpha?", &chunks);

        assert!(prompt.starts_with("Search results:\n\n"));
        assert!(prompt
            .contains("[Page Number 1] \"alpha beta\"\n\n[Page Number 3] \"gamma delta\"\n\n"));
        assert!(prompt.ends_with("Query: where is alpha?\nAnswer:"));
    }

    #[test]
    fn instruction_block_grounds_the_answerer() {
        let prompt = build_prompt("anything", &[chunk(1, "text")]);

        assert!(prompt.contains("Cite each reference using [Page Number] notation"));
        assert!(prompt.contains("'I could not find an answer'"));
        assert!(prompt.contains("Answer step by step."));
    }

    #[test]
    fn empty_result_set_still_forms_a_prompt() {
        let prompt = build_prompt("anything", &[]);

        assert!(prompt.starts_with("Search results:\n\nInstructions:"));
        assert!(prompt.ends_with("Query: anything\nAnswer:"));
    }

    #[test]
    fn assembly_is_deterministic() {
        let chunks = vec![chunk(2, "some words")];
        assert_eq!(
            build_prompt("a question", &chunks),
            build_prompt("a question", &chunks)
        );
    }
}
