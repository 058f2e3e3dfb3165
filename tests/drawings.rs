use ascii_bst::Tree;

/// Builds a tree by inserting the characters of `input` one at a time and checks its drawing
/// line by line.
fn assert_drawing(input: &str, lines: &[&str]) {
    let tree: Tree<char> = input.chars().collect();
    assert_eq!(
        tree.drawing().to_string(),
        lines.join("\n"),
        "drawing of {}",
        input
    );
}

#[test]
fn dbacghjk() {
    assert_drawing(
        "DBACGHJK",
        &[
            "    D",
            "   / \\",
            "  B   G",
            " / \\   \\",
            "A   C   H",
            "         \\",
            "          J",
            "           \\",
            "            K",
            "",
        ],
    );
}

#[test]
fn dacbefmlghjk() {
    assert_drawing(
        "DACBEFMLGHJK",
        &[
            "  D",
            " / \\",
            "A   E",
            " \\   \\",
            "  C   F",
            " /     \\",
            "B       M",
            "       /",
            "      L",
            "     /",
            "    G",
            "     \\",
            "      H",
            "       \\",
            "        J",
            "         \\",
            "          K",
            "",
        ],
    );
}

#[test]
fn jabcdefisrqpon() {
    assert_drawing(
        "JABCDEFISRQPON",
        &[
            "            J",
            "           / \\",
            "          /   \\",
            "         /     \\",
            "        /       \\",
            "       /         \\",
            "      /           \\",
            "     /             \\",
            "    /               \\",
            "   /                 \\",
            "  /                   \\",
            " /                     \\",
            "A                       S",
            " \\                     /",
            "  B                   R",
            "   \\                 /",
            "    C               Q",
            "     \\             /",
            "      D           P",
            "       \\         /",
            "        E       O",
            "         \\     /",
            "          F   N",
            "           \\",
            "            I",
            "",
        ],
    );
}

#[test]
fn nyuemracoptb() {
    assert_drawing(
        "NYUEMRACOPTB",
        &[
            "        N",
            "       / \\",
            "      /   \\",
            "     /     \\",
            "    /       \\",
            "   /         \\",
            "  E           Y",
            " / \\         /",
            "A   M       U",
            " \\         /",
            "  C       R",
            " /       / \\",
            "B       O   T",
            "         \\",
            "          P",
            "",
        ],
    );
}

#[test]
fn profesmdylagivhun() {
    assert_drawing(
        "PROFESMDYLAGIVHUN",
        &[
            "          P",
            "         / \\",
            "        O   R",
            "       /     \\",
            "      F       S",
            "     / \\       \\",
            "    E   M       Y",
            "   /   / \\     /",
            "  D   L   N   V",
            " /   /       /",
            "A   G       U",
            "     \\",
            "      I",
            "     /",
            "    H",
            "",
        ],
    );
}

#[test]
fn gaqpedcbmntvx() {
    assert_drawing(
        "GAQPEDCBMNTVX",
        &[
            "        G",
            "       / \\",
            "      /   \\",
            "     /     \\",
            "    A       Q",
            "     \\     / \\",
            "      E   P   T",
            "     /   /     \\",
            "    D   M       V",
            "   /     \\       \\",
            "  C       N       X",
            " /",
            "B",
            "",
        ],
    );
}

#[test]
fn ascending_chain() {
    assert_drawing(
        "ABCDE",
        &[
            "A",
            " \\",
            "  B",
            "   \\",
            "    C",
            "     \\",
            "      D",
            "       \\",
            "        E",
            "",
        ],
    );
}

#[test]
fn descending_chain() {
    assert_drawing(
        "EDCBA",
        &[
            "        E",
            "       /",
            "      D",
            "     /",
            "    C",
            "   /",
            "  B",
            " /",
            "A",
            "",
        ],
    );
}

#[test]
fn ascending_chain_has_no_left_arrows() {
    let tree: Tree<char> = "ABCDEFGHIJ".chars().collect();
    let drawing = tree.drawing().to_string();

    assert!(!drawing.contains('/'));
    assert_eq!(drawing.matches('\\').count(), 9);
}

#[test]
fn drawing_follows_removals() {
    let mut tree: Tree<char> = "DBACGHJK".chars().collect();
    assert!(tree.remove(&'D'));

    // C is lifted into the root, which is the shape inserting it first would have built.
    let rebuilt: Tree<char> = "CBAGHJK".chars().collect();
    assert_eq!(tree.drawing().to_string(), rebuilt.drawing().to_string());
}

#[test]
fn rendering_to_a_writer() {
    let tree: Tree<char> = "PROFESMDYLAGIVHUN".chars().collect();
    let mut out = Vec::new();
    tree.render(&mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.lines().next(), Some("          P"));
    assert_eq!(text.lines().count(), 15);
}
