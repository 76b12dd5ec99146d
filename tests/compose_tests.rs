use paceline::display::{
    LineInputs, build_status_line, compose, project_label, style_component, window_component,
};
use paceline::models::GitInfo;
use paceline::severity::Decoration;
use paceline::window::{WINDOWS, WindowStatus};

fn git(branch: Option<&str>, is_clean: Option<bool>) -> GitInfo {
    GitInfo {
        branch: branch.map(str::to_string),
        is_clean,
    }
}

#[test]
fn compose_skips_absent_components() {
    let line = compose(vec![
        None,
        Some("t: 20%".to_string()),
        None,
        Some("myrepo main".to_string()),
        None,
    ]);
    assert_eq!(line, "t: 20% | myrepo main");
    assert!(!line.contains(" |  | "));
    assert!(!line.starts_with(" | "));
    assert!(!line.ends_with(" | "));
}

#[test]
fn compose_of_nothing_is_empty() {
    assert_eq!(compose(vec![None, None]), "");
}

#[test]
fn dirty_branch_marking() {
    let dirty = git(Some("main"), Some(false));
    assert_eq!(project_label("myrepo", None, Some(&dirty)), "myrepo main*");

    let clean = git(Some("main"), Some(true));
    assert_eq!(project_label("myrepo", None, Some(&clean)), "myrepo main");

    // unknown cleanliness gets no marker
    let unknown = git(Some("main"), None);
    assert_eq!(project_label("myrepo", None, Some(&unknown)), "myrepo main");
}

#[test]
fn project_label_degrades_without_git() {
    assert_eq!(project_label("myrepo", None, None), "myrepo");
    let detached = git(None, Some(true));
    assert_eq!(project_label("myrepo", None, Some(&detached)), "myrepo");
}

#[test]
fn project_label_carries_type_tag() {
    let info = git(Some("main"), Some(false));
    assert_eq!(
        project_label("myrepo", Some("rs"), Some(&info)),
        "myrepo[rs] main*"
    );
    assert_eq!(project_label("myrepo", Some("go"), None), "myrepo[go]");
}

#[test]
fn style_component_only_for_non_default_styles() {
    assert_eq!(style_component("default", Decoration::Plain), None);
    assert_eq!(
        style_component("verbose", Decoration::Plain),
        Some("style:verbose".to_string())
    );
}

#[test]
fn window_component_inside_counts_down() {
    let w = WINDOWS[0];
    let status = WindowStatus::Inside {
        window: w,
        elapsed: 150,
        remaining: 150,
    };
    assert_eq!(
        window_component(&status, false, Decoration::Plain),
        "[WARN] left:2h30m"
    );
    assert_eq!(
        window_component(&status, true, Decoration::Plain),
        "[WARN] window:2h30m left"
    );
}

#[test]
fn window_component_fresh_window_is_urgent() {
    let w = WINDOWS[0];
    let status = WindowStatus::Inside {
        window: w,
        elapsed: 10,
        remaining: 290,
    };
    assert_eq!(
        window_component(&status, false, Decoration::Plain),
        "[CRIT] left:4h50m"
    );
}

#[test]
fn window_component_outside_shows_next_opening() {
    let status = WindowStatus::Outside {
        until_open: 510,
        tomorrow: true,
    };
    assert_eq!(
        window_component(&status, false, Decoration::Plain),
        "opens:8h30m (tomorrow)"
    );
    assert_eq!(
        window_component(&status, true, Decoration::Plain),
        "opens in 8h30m (tomorrow)"
    );
}

#[test]
fn full_line_in_plain_mode() {
    let w = WINDOWS[0];
    let info = git(Some("main"), Some(false));
    let line = build_status_line(
        &LineInputs {
            context_percent: 10,
            token_percent: Some(20),
            window_status: WindowStatus::Inside {
                window: w,
                elapsed: 150,
                remaining: 150,
            },
            project: "myrepo",
            type_tag: None,
            git: Some(&info),
            style: "default",
        },
        false,
        Decoration::Plain,
    );
    assert_eq!(
        line,
        "[OK] ctx:10% | [OK] tok:20% | [WARN] left:2h30m | myrepo main*"
    );
}

#[test]
fn full_line_outside_window_has_no_token_component() {
    let line = build_status_line(
        &LineInputs {
            context_percent: 0,
            token_percent: None,
            window_status: WindowStatus::Outside {
                until_open: 510,
                tomorrow: true,
            },
            project: "myrepo",
            type_tag: None,
            git: None,
            style: "concise",
        },
        false,
        Decoration::Plain,
    );
    assert_eq!(
        line,
        "[OK] ctx:0% | opens:8h30m (tomorrow) | myrepo | style:concise"
    );
}

#[test]
fn long_labels_spell_out_components() {
    let w = WINDOWS[2];
    let line = build_status_line(
        &LineInputs {
            context_percent: 85,
            token_percent: Some(70),
            window_status: WindowStatus::Inside {
                window: w,
                elapsed: 200,
                remaining: 100,
            },
            project: "svc",
            type_tag: Some("rs"),
            git: None,
            style: "default",
        },
        true,
        Decoration::Plain,
    );
    assert_eq!(
        line,
        "[CRIT] context:85% | [WARN] tokens:70% | [WARN] window:1h40m left | svc[rs]"
    );
}
