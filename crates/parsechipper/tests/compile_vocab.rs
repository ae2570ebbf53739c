#![allow(missing_docs)]

use std::{fs::File, io::Write, path::Path};

use parsechipper::{
    NormalizationVersion,
    ParsechipperError,
    SubtokenVocab,
    SubtokenVocabOptions,
    vocab::{IdSegment, UNK_TOKEN, io::load_vocab_lines_path},
};

const VOCAB_LINES: &[&str] = &[
    "P",
    "S0",
    "/S0",
    "NP",
    "/NP",
    "NP-SUBJ",
    "/NP-SUBJ",
    "NP-AGE",
    "VP",
    "/VP",
    "ADVP",
    "  no_nf_et_kk  ",
    "no_0_nf_et",
    "so_1_nf_et",
    "so_2_þf_þgf",
    "so_subj_op_et",
    "so_lh_nt",
    "so_hvk_nf",
    "so_hk_hk",
    "so_lhþt_gr",
    "pfn_nf",
    "st",
    "eo",
    "lo_nf_et_kk_sb",
    "tala",
];

fn write_vocab(path: &Path) {
    let mut f = File::create(path).unwrap();
    for line in VOCAB_LINES {
        writeln!(f, "{line}").unwrap();
    }
}

fn load(
    path: &Path,
    version: NormalizationVersion,
) -> SubtokenVocab {
    SubtokenVocabOptions::default()
        .with_path(Some(path))
        .with_version(version)
        .load()
        .unwrap()
}

#[test]
fn test_compile_from_file() {
    let dir = tempdir::TempDir::new("compile_vocab").unwrap();
    let path = dir.path().join("parsing_vocab.txt");
    write_vocab(&path);

    let vocab = load(&path, NormalizationVersion::V1);

    // Every id below the OOV id has exactly one spelling; ranges are contiguous.
    let n = vocab.len();
    assert_eq!(vocab.oov_id() as usize, n);
    assert_eq!(vocab.id_table().len(), n + 1);
    assert_eq!(vocab.id_table()[n], UNK_TOKEN);
    assert_eq!(vocab.segment_range(IdSegment::Full).start, 0);
    assert_eq!(
        vocab.segment_range(IdSegment::Full).end,
        vocab.segment_range(IdSegment::Head).start
    );
    assert_eq!(
        vocab.segment_range(IdSegment::Head).end,
        vocab.segment_range(IdSegment::Tail).start
    );
    assert_eq!(vocab.segment_range(IdSegment::Tail).end, n);

    for (segment, expected_first) in [
        (IdSegment::Full, "/NP"),
        (IdSegment::Head, "lo"),
        (IdSegment::Tail, "et"),
    ] {
        let tokens = vocab.segment_tokens(segment);
        assert_eq!(tokens[0], expected_first);
        assert!(tokens.windows(2).all(|w| w[0] < w[1]), "{segment} sorted");
    }

    // Discriminators join the head.
    for head in ["no_0", "so_1", "so_2", "so_subj"] {
        assert!(vocab.token_id(IdSegment::Head, head).is_some(), "{head}");
    }
    assert_eq!(vocab.token_id(IdSegment::Head, "so_lh"), None);

    // v1 rewrites.
    assert!(vocab.token_id(IdSegment::Tail, "lhnt").is_some());
    assert!(vocab.token_id(IdSegment::Tail, "hk").is_some());
    assert_eq!(vocab.token_id(IdSegment::Tail, "hvk"), None);
    assert!(vocab.token_id(IdSegment::Tail, "lhþt").is_some());

    // Nonterminals.
    assert!(vocab.nonterm_left().contains("NP-AGE"));
    assert!(vocab.nonterm_right().contains("/NP-SUBJ"));
    assert_eq!(vocab.left_of("/ADVP"), Some("ADVP"));
    assert_eq!(vocab.r_to_l().len(), vocab.nonterm_left().len());
    assert!(!vocab.terminals().contains("NP"));
    assert!(vocab.terminals().contains("tala"));

    // Round trip.
    for id in 0..vocab.oov_id() {
        let spelling = vocab.token_str(id).unwrap();
        let segment = vocab.segment_of(id).unwrap();
        let token = match segment {
            IdSegment::Tail => spelling.strip_prefix('_').unwrap(),
            _ => spelling,
        };
        assert_eq!(vocab.token_id(segment, token), Some(id));
    }
}

#[test]
fn test_versions_differ() {
    let dir = tempdir::TempDir::new("compile_vocab_versions").unwrap();
    let path = dir.path().join("parsing_vocab.txt");
    write_vocab(&path);

    let v1 = load(&path, NormalizationVersion::V1);
    let v2 = load(&path, NormalizationVersion::V2);

    assert_eq!(v2.token_id(IdSegment::Tail, "lhþt"), None);
    assert!(v2.token_id(IdSegment::Tail, "þt").is_some());
    assert!(v2.token_id(IdSegment::Tail, "hvk").is_some());
    assert_ne!(v1.id_table(), v2.id_table());

    // Reloading is deterministic.
    assert_eq!(v2, load(&path, NormalizationVersion::V2));
}

#[test]
fn test_id_table_save() {
    let dir = tempdir::TempDir::new("compile_vocab_save").unwrap();
    let src = dir.path().join("parsing_vocab.txt");
    let dst = dir.path().join("ids.txt");
    write_vocab(&src);

    let vocab = load(&src, NormalizationVersion::V1);
    parsechipper::vocab::io::save_id_table_path(vocab.id_table(), &dst).unwrap();

    assert_eq!(load_vocab_lines_path(&dst).unwrap(), vocab.id_table());
}

#[test]
fn test_missing_file() {
    let dir = tempdir::TempDir::new("compile_vocab_missing").unwrap();
    let path = dir.path().join("absent.txt");

    let res = SubtokenVocab::<u32>::from_path(NormalizationVersion::V1, &path);
    assert!(matches!(res, Err(ParsechipperError::VocabRead { .. })));
}
