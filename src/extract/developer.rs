use super::streaming::is_numeric;
use super::{insert, ExtractedIds, Target};

/// GitHub owner/repo plus pull request or issue numbers
pub(super) fn github(target: &Target<'_>, ids: &mut ExtractedIds) {
    let segments = &target.segments;

    // A lone segment is a site page (`/features`, `/login`) or a user profile
    let (Some(owner), Some(repo)) = (segments.first(), segments.get(1)) else {
        return;
    };
    insert(ids, "github_owner", *owner);
    insert(ids, "github_repo", *repo);

    if let (Some(kind), Some(number)) = (segments.get(2), segments.get(3)) {
        match *kind {
            "pull" => insert(ids, "github_pr_number", *number),
            "issues" => insert(ids, "github_issue_number", *number),
            _ => {}
        }
    }
}

/// GitLab namespace/project plus merge request or issue numbers
///
/// Everything before the `-` separator segment is the project path; its last
/// segment is the project and the rest (possibly nested groups) the namespace.
pub(super) fn gitlab(target: &Target<'_>, ids: &mut ExtractedIds) {
    let segments = &target.segments;
    let separator = segments.iter().position(|s| *s == "-");
    let project_path = &segments[..separator.unwrap_or(segments.len())];

    if let [namespace @ .., project] = project_path {
        if !namespace.is_empty() {
            insert(ids, "gitlab_namespace", namespace.join("/"));
            insert(ids, "gitlab_project", *project);
        }
    }

    if let Some(index) = separator {
        match (segments.get(index + 1), segments.get(index + 2)) {
            (Some(&"merge_requests"), Some(number)) if is_numeric(number) => {
                insert(ids, "gitlab_mr_number", *number)
            }
            (Some(&"issues"), Some(number)) if is_numeric(number) => {
                insert(ids, "gitlab_issue_number", *number)
            }
            _ => {}
        }
    }
}

pub(super) fn stackoverflow(target: &Target<'_>, ids: &mut ExtractedIds) {
    if let Some(id) = target.segment_after("questions").filter(|id| is_numeric(id)) {
        insert(ids, "stackoverflow_question_id", id);
    }
}

/// npm package names, keeping the scope of scoped packages
pub(super) fn npm(target: &Target<'_>, ids: &mut ExtractedIds) {
    let Some(index) = target.segments.iter().position(|s| *s == "package") else {
        return;
    };

    match (target.segments.get(index + 1), target.segments.get(index + 2)) {
        (Some(scope), Some(name)) if scope.starts_with('@') => {
            insert(ids, "npm_package", format!("{}/{}", scope, name))
        }
        (Some(name), _) if !name.starts_with('@') => insert(ids, "npm_package", *name),
        _ => {}
    }
}

pub(super) fn crates_io(target: &Target<'_>, ids: &mut ExtractedIds) {
    if let Some(name) = target.segment_after("crates") {
        insert(ids, "crate_name", name);
    }
}

pub(super) fn pypi(target: &Target<'_>, ids: &mut ExtractedIds) {
    if let Some(name) = target.segment_after("project") {
        insert(ids, "pypi_project", name);
    }
}
