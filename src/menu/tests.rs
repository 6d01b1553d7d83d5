use super::parser::parse_title;
use super::*;

const DEEPIN_MENU: &str = r#"
### BEGIN /etc/grub.d/10_linux ###
menuentry 'Deepin GNU/Linux' --class deepin --class gnu-linux --class os $menuentry_id_option 'gnulinux-simple-2f5c' {
	load_video
	insmod gzio
	linux	/boot/vmlinuz root=UUID=2f5c ro quiet splash
}
### END /etc/grub.d/10_linux ###
menuentry "Memory Test" {
	linux16 /boot/memtest86+.bin
}
"#;

const NESTED_MENU: &str = r#"
menuentry 'Ubuntu' --class ubuntu {
	linux /vmlinuz
}
submenu 'Advanced options for Ubuntu' $menuentry_id_option 'gnulinux-advanced' {
	menuentry 'Ubuntu, with Linux 6.8.0' --class ubuntu {
		linux /vmlinuz-6.8.0
	}
	menuentry 'Ubuntu, with Linux 6.8.0 (recovery mode)' {
		linux /vmlinuz-6.8.0 single
	}
	submenu 'Older kernels' {
		menuentry 'Ubuntu, with Linux 6.5.0' {
			linux /vmlinuz-6.5.0
		}
	}
}
menuentry 'UEFI Firmware Settings' {
	fwsetup
}
"#;

#[test]
fn test_parse_title_single_and_double_quotes() {
    assert_eq!(
        parse_title("menuentry 'Deepin GNU/Linux' --class deepin {").as_deref(),
        Some("Deepin GNU/Linux")
    );
    assert_eq!(
        parse_title(r#"submenu "Advanced options" {"#).as_deref(),
        Some("Advanced options")
    );
    assert_eq!(parse_title("menuentry 'unterminated {"), None);
    assert_eq!(parse_title("menuentry bare-word {"), None);
}

#[test]
fn test_simple_titles_top_level_only() {
    let tree = MenuTree::parse(DEEPIN_MENU).unwrap();
    assert_eq!(tree.len(), 2);
    assert_eq!(tree.simple_titles(), vec!["Deepin GNU/Linux", "Memory Test"]);
    assert_eq!(tree.full_titles(), tree.simple_titles());
}

#[test]
fn test_submenu_parent_links() {
    let text = "submenu 'Advanced options' {\nmenuentry 'Ubuntu' {\n}\n}\n";
    let tree = MenuTree::parse(text).unwrap();

    let entries = tree.entries();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].kind, EntryKind::Submenu);
    assert_eq!(entries[0].level, 0);
    assert_eq!(entries[0].parent, None);
    assert_eq!(entries[1].kind, EntryKind::MenuEntry);
    assert_eq!(entries[1].level, 1);
    assert_eq!(entries[1].parent, Some(0));

    assert_eq!(tree.full_titles(), vec!["Advanced options>Ubuntu"]);
    assert!(!tree.simple_titles().contains(&"Ubuntu".to_string()));
}

#[test]
fn test_nested_submenus_full_titles() {
    let tree = MenuTree::parse(NESTED_MENU).unwrap();
    assert_eq!(
        tree.simple_titles(),
        vec!["Ubuntu", "UEFI Firmware Settings"]
    );
    assert_eq!(
        tree.full_titles(),
        vec![
            "Ubuntu",
            "Advanced options for Ubuntu>Ubuntu, with Linux 6.8.0",
            "Advanced options for Ubuntu>Ubuntu, with Linux 6.8.0 (recovery mode)",
            "Advanced options for Ubuntu>Older kernels>Ubuntu, with Linux 6.5.0",
            "UEFI Firmware Settings",
        ]
    );

    let innermost = tree
        .entries()
        .iter()
        .position(|e| e.title == "Ubuntu, with Linux 6.5.0")
        .unwrap();
    let chain: Vec<&str> = tree
        .ancestors(innermost)
        .map(|e| e.title.as_str())
        .collect();
    assert_eq!(chain, vec!["Older kernels", "Advanced options for Ubuntu"]);
}

#[test]
fn test_sibling_indexes_reset_per_level() {
    let tree = MenuTree::parse(NESTED_MENU).unwrap();
    let indexes: Vec<(&str, EntryKind, usize, usize)> = tree
        .entries()
        .iter()
        .map(|e| (e.title.as_str(), e.kind, e.level, e.sibling_index))
        .collect();
    assert_eq!(
        indexes,
        vec![
            ("Ubuntu", EntryKind::MenuEntry, 0, 0),
            ("Advanced options for Ubuntu", EntryKind::Submenu, 0, 0),
            ("Ubuntu, with Linux 6.8.0", EntryKind::MenuEntry, 1, 0),
            ("Ubuntu, with Linux 6.8.0 (recovery mode)", EntryKind::MenuEntry, 1, 1),
            ("Older kernels", EntryKind::Submenu, 1, 0),
            ("Ubuntu, with Linux 6.5.0", EntryKind::MenuEntry, 2, 0),
            ("UEFI Firmware Settings", EntryKind::MenuEntry, 0, 1),
        ]
    );
}

#[test]
fn test_top_level_count_matches_directives() {
    let tree = MenuTree::parse(NESTED_MENU).unwrap();
    let top_level = tree
        .entries()
        .iter()
        .filter(|e| e.kind == EntryKind::MenuEntry && e.level == 0)
        .count();
    assert_eq!(top_level, 2);
    assert_eq!(tree.simple_titles().len(), top_level);
}

#[test]
fn test_unmatched_quote_is_error() {
    let text = "menuentry 'Deepin {\n}\n";
    let err = MenuTree::parse(text).unwrap_err();
    assert!(err.is_parse_error());
    assert!(err.to_string().contains("menuentry 'Deepin {"));
}

#[test]
fn test_directive_inside_menuentry_is_error() {
    let text = "menuentry 'A' {\nmenuentry 'B' {\n}\n}\n";
    let err = MenuTree::parse(text).unwrap_err();
    assert!(matches!(
        err,
        GrubError::NestedDirective {
            directive: "menuentry"
        }
    ));

    let text = "menuentry 'A' {\nsubmenu 'B' {\n}\n}\n";
    let err = MenuTree::parse(text).unwrap_err();
    assert!(matches!(
        err,
        GrubError::NestedDirective { directive: "submenu" }
    ));
}

#[test]
fn test_stray_brace_and_truncation_tolerated() {
    let text = "}\nmenuentry 'A' {\n}\n}\nsubmenu 'S' {\nmenuentry 'B' {\n";
    let tree = MenuTree::parse(text).unwrap();
    assert_eq!(tree.len(), 3);
    assert_eq!(tree.simple_titles(), vec!["A"]);
    assert_eq!(tree.full_titles(), vec!["A", "S>B"]);
}

#[test]
fn test_other_lines_ignored() {
    let text = "set default=0\nif [ x$feature = xy ]; then\n  menuentry_id_option=x\nfi\n";
    let tree = MenuTree::parse(text).unwrap();
    assert!(tree.is_empty());
}
