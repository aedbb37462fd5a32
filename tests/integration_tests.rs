//! Integration tests for the Siemens star document pipeline

use std::fs;

use pretty_assertions::assert_eq;
use sstar::{render, render_with_config, write_star, PostScriptConfig, StarError};
use tempfile::TempDir;

/// newpath, moveto, two linetos, closepath, fill
const DIRECTIVES_PER_WEDGE: usize = 6;

/// Everything but fill
const PATH_DIRECTIVES_PER_WEDGE: usize = 5;

/// Lines between the coordinate setup and `showpage`
fn wedge_lines(doc: &str) -> Vec<&str> {
    let lines: Vec<&str> = doc.lines().collect();
    let start = lines
        .iter()
        .position(|l| l.ends_with("dup scale"))
        .expect("document has a scale directive")
        + 1;
    let end = lines
        .iter()
        .position(|l| *l == "showpage")
        .expect("document has showpage");
    lines[start..end].to_vec()
}

#[test]
fn test_two_spoke_document() {
    let doc = render(2).expect("Should render");
    let expected = "\
%!PS-Adobe-2.0
%%Creator: sstar
%%BoundingBox: 0 0 width height
%%LanguageLevel: 2
%%Pages: 1
<< /PageSize [612 792] >> setpagedevice
306 396 translate
378.000000 dup scale
newpath
0.000000 0.000000 moveto
0.707107 0.707107 lineto
0.707107 -0.707107 lineto
closepath
fill
newpath
0.000000 0.000000 moveto
-0.707107 -0.707107 lineto
-0.707107 0.707107 lineto
closepath
fill
showpage
%%EOF
";
    assert_eq!(doc, expected);
}

#[test]
fn test_header_snapshot() {
    let doc = render(20).expect("Should render");
    let header = doc.lines().take(8).collect::<Vec<_>>().join("\n");
    insta::assert_snapshot!(header, @r"
    %!PS-Adobe-2.0
    %%Creator: sstar
    %%BoundingBox: 0 0 width height
    %%LanguageLevel: 2
    %%Pages: 1
    << /PageSize [612 792] >> setpagedevice
    306 396 translate
    378.000000 dup scale
    ");
}

#[test]
fn test_wedge_directive_counts() {
    for n in [2_i64, 4, 20, 333] {
        let doc = render(n).expect("Should render");
        let body = wedge_lines(&doc);
        let n = n as usize;
        assert_eq!(body.len(), n * DIRECTIVES_PER_WEDGE);
        let path_directives = body.iter().filter(|l| **l != "fill").count();
        assert_eq!(path_directives, n * PATH_DIRECTIVES_PER_WEDGE);
    }
}

#[test]
fn test_document_framing_is_constant() {
    for n in [2_i64, 3, 50, 1000] {
        let doc = render(n).expect("Should render");
        assert_eq!(doc.matches("showpage").count(), 1);
        assert!(doc.ends_with("%%EOF\n"));
        assert!(doc.starts_with("%!PS-Adobe-2.0\n"));
    }
}

#[test]
fn test_default_matches_twenty() {
    let default_config = PostScriptConfig::default();
    assert_eq!(
        render(20).unwrap(),
        render_with_config(20, &default_config).unwrap()
    );
    assert_eq!(
        render(20).unwrap().matches("newpath").count(),
        sstar::SpokeCount::default().get()
    );
}

#[test]
fn test_write_star_creates_file() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("sstar.ps");
    let config = PostScriptConfig::new().with_output(&output);

    let path = write_star(12, &config).expect("Should write");
    assert_eq!(path, output);

    let contents = fs::read_to_string(&output).unwrap();
    assert_eq!(contents, render(12).unwrap());
}

#[test]
fn test_write_star_overwrites_previous_run() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("sstar.ps");
    let config = PostScriptConfig::new().with_output(&output);

    write_star(40, &config).unwrap();
    write_star(3, &config).unwrap();

    let contents = fs::read_to_string(&output).unwrap();
    assert_eq!(contents.matches("newpath").count(), 3);
}

#[test]
fn test_invalid_spokes_write_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("sstar.ps");
    let config = PostScriptConfig::new().with_output(&output);

    for n in [1, 0, -7] {
        let err = write_star(n, &config).unwrap_err();
        assert!(matches!(err, StarError::InvalidArgument { spokes } if spokes == n));
        assert!(!output.exists(), "n = {} must not create a file", n);
    }
}

#[test]
fn test_invalid_spokes_keep_existing_file() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("sstar.ps");
    fs::write(&output, "previous").unwrap();
    let config = PostScriptConfig::new().with_output(&output);

    assert!(write_star(1, &config).is_err());
    assert_eq!(fs::read_to_string(&output).unwrap(), "previous");
}

#[test]
fn test_unwritable_output_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("missing").join("sstar.ps");
    let config = PostScriptConfig::new().with_output(&output);

    let err = write_star(4, &config).unwrap_err();
    assert!(matches!(err, StarError::Io(_)));
}

#[test]
fn test_invalid_page_keeps_existing_file() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("sstar.ps");
    fs::write(&output, "previous").unwrap();
    let config = PostScriptConfig::new()
        .with_output(&output)
        .with_page(sstar::PageConfig::new().with_size(20.0, 20.0));

    let err = write_star(8, &config).unwrap_err();
    assert!(matches!(err, StarError::InvalidPage { .. }));
    assert_eq!(fs::read_to_string(&output).unwrap(), "previous");
}
