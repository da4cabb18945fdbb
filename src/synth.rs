//! Assembly of the single compilable translation unit: preamble, optional
//! defines block, every case body in discovery order, and a generated entry
//! point that registers each case with the suite.

use std::fs;
use std::path::Path;

use crate::buffer::Buffer;
use crate::error::{IoError, Result};
use crate::extract::Case;

/// Enables the harness implementation and pulls in its header.
const PREAMBLE: &str = "#define TOAST_IMPLEMENTATION\n#include \"toast.h\"\n\n";

/// Label the generated suite is constructed with.
const SUITE_LABEL: &str = "Toaster";

pub fn synthesize(cases: &[Case], defines: Option<&str>) -> Result<Vec<u8>> {
    let mut out = Buffer::new();
    out.push_str(PREAMBLE)?;

    if let Some(block) = defines {
        out.push_str(block)?;
        out.push_str("\n")?;
    }

    for case in cases {
        out.extend_from_slice(case.text())?;
    }

    out.push_str("int main() {\n")?;
    out.push_str(&format!(
        "  PackOfToast pack = plug_in_toaster(\"{SUITE_LABEL}\");\n\n"
    ))?;

    for (index, case) in cases.iter().enumerate() {
        let name = case.name();
        out.push_str(&format!(
            "  SliceOfToast slice_{index} = {{.toast = {name}, .name = \"{name}\"}};\n  insert_toast(&pack, slice_{index});\n\n"
        ))?;
    }

    out.push_str("\n  toast(pack);\n  unplug_toaster(pack);\n  return 0;\n}\n")?;

    Ok(out.into_vec())
}

/// Persist the synthesized unit at its artifact path.
pub fn write_unit(path: &Path, unit: &[u8]) -> Result<()> {
    fs::write(path, unit).map_err(|source| IoError::write_error(path, source))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::extract_cases;
    use pretty_assertions::assert_eq;

    fn cases_from(sources: &[&str]) -> Vec<Case> {
        let mut cases = Vec::new();
        for (i, source) in sources.iter().enumerate() {
            let file_name = format!("f{i}.test.c");
            cases.extend(
                extract_cases(&file_name, source.as_bytes())
                    .unwrap()
                    .into_vec(),
            );
        }
        cases
    }

    fn offset_of(unit: &str, needle: &str) -> usize {
        unit.find(needle)
            .unwrap_or_else(|| panic!("missing '{needle}' in synthesized unit"))
    }

    #[test]
    fn test_preamble_comes_first() {
        let unit = synthesize(&[], None).unwrap();
        let text = String::from_utf8(unit).unwrap();
        assert!(text.starts_with("#define TOAST_IMPLEMENTATION\n#include \"toast.h\"\n"));
    }

    #[test]
    fn test_cases_registered_in_order() {
        let cases = cases_from(&[
            "void alpha(BurntToast *b) { eat_toast(b); }",
            "void beta(BurntToast *b) { eat_toast(b); }",
        ]);
        let unit = synthesize(&cases, None).unwrap();
        let text = String::from_utf8(unit).unwrap();

        assert!(offset_of(&text, "void alpha(") < offset_of(&text, "void beta("));
        assert!(text.contains("SliceOfToast slice_0 = {.toast = alpha, .name = \"alpha\"};"));
        assert!(text.contains("insert_toast(&pack, slice_0);"));
        assert!(text.contains("SliceOfToast slice_1 = {.toast = beta, .name = \"beta\"};"));
        assert!(text.contains("insert_toast(&pack, slice_1);"));
        assert!(offset_of(&text, "slice_0") < offset_of(&text, "slice_1"));
    }

    #[test]
    fn test_entry_point_runs_and_releases_suite() {
        let unit = synthesize(&[], None).unwrap();
        let text = String::from_utf8(unit).unwrap();
        let construct = offset_of(&text, "PackOfToast pack = plug_in_toaster(\"Toaster\");");
        let run = offset_of(&text, "toast(pack);");
        let release = offset_of(&text, "unplug_toaster(pack);");
        assert!(construct < run && run < release);
        assert!(text.contains("return 0;"));
    }

    #[test]
    fn test_defines_block_sits_between_preamble_and_cases() {
        let cases = cases_from(&["void uses_defines(BurntToast *b) { eat_toast(b); }"]);
        let unit = synthesize(&cases, Some("#define ANSWER 42\n")).unwrap();
        let text = String::from_utf8(unit).unwrap();

        let preamble = offset_of(&text, "#include \"toast.h\"");
        let defines = offset_of(&text, "#define ANSWER 42");
        let case = offset_of(&text, "void uses_defines(");
        assert!(preamble < defines && defines < case);
    }

    #[test]
    fn test_case_text_is_verbatim() {
        let cases = cases_from(&["void kept(BurntToast *b) {\n  eat_toast(b);\n}"]);
        let unit = synthesize(&cases, None).unwrap();
        let text = String::from_utf8(unit).unwrap();
        assert!(text.contains("void kept(BurntToast *b) {\n  eat_toast(b);\n}"));
    }

    #[test]
    fn test_write_unit_persists_bytes() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("tmp_toast.c");
        write_unit(&path, b"int main() { return 0; }\n").unwrap();
        assert_eq!(
            std::fs::read(&path).unwrap(),
            b"int main() { return 0; }\n".to_vec()
        );
    }
}
