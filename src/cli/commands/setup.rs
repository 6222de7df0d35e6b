//! Setup command - clone an organization repository

use std::path::Path;

use matsuri::MatsuriError;
use matsuri::core::models::RepoIdentity;
use matsuri::core::ports::VersionControl;
use matsuri::core::services::find_org_email;
use matsuri::output::OperationResult;

use super::Context;

/// Clone `name` and set the organization email in its local config
pub fn setup(ctx: &Context, name: &str, http: bool) -> anyhow::Result<()> {
    if ctx.repo.as_ref().is_some_and(|r| r.name == name) {
        OperationResult {
            success: true,
            message: "You are already inside the target repository.".to_string(),
        }
        .render(ctx.mode);
        return Ok(());
    }
    if ctx.vcs.remote_origin_url().is_some() {
        return Err(
            MatsuriError::validation("you are already inside a git repository, aborting").into()
        );
    }

    let session = ctx.session();
    let forge = session.forge();
    let target = RepoIdentity::new(ctx.settings.forge.owner.as_str(), name);
    let repository = forge.get_repository(&target)?;
    let url = if http {
        repository.clone_url
    } else {
        repository.ssh_url
    };

    ctx.say(&format!("Cloning {url}..."));
    let output = ctx.vcs.clone_repo(&url)?;
    ctx.echo(&output);

    let domain = &ctx.settings.setup.email_domain;
    let email = find_org_email(&forge.list_user_emails()?, domain).ok_or_else(|| {
        MatsuriError::validation(format!(
            "a verified @{domain} email address was not found in this account, \
             please add one in your GitHub profile"
        ))
    })?;
    ctx.vcs.set_local_email(Path::new(&repository.name), &email)?;

    OperationResult {
        success: true,
        message: format!("Cloned {} and set user.email to {email}", target.full_name()),
    }
    .render(ctx.mode);
    Ok(())
}
