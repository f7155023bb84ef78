//! Login and logout: the session token lives in the config file

use crate::context::Context;
use anyhow::Result;
use std::io::Write;

pub fn login(ctx: &mut Context, out: &mut dyn Write, token: &str) -> Result<()> {
    ctx.config.set_session_token(token)?;
    ctx.save_config()?;
    tracing::info!("Session token stored");
    ctx.notifier.success(out, "Logged in")?;
    Ok(())
}

pub fn logout(ctx: &mut Context, out: &mut dyn Write) -> Result<()> {
    if !ctx.authenticated() {
        ctx.notifier.info(out, "Not logged in")?;
        return Ok(());
    }
    ctx.config.clear_session();
    ctx.save_config()?;
    ctx.notifier.info(out, "Logged out")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nuru_common::backend::FakeBackend;
    use nuru_common::config::NuruConfig;
    use tempfile::tempdir;

    #[test]
    fn test_login_persists_token() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut ctx = Context::new(Box::new(FakeBackend::new()), NuruConfig::default());
        ctx.config_path = Some(path.clone());

        let mut out = Vec::new();
        login(&mut ctx, &mut out, "abc123").unwrap();
        assert!(ctx.authenticated());
        let saved = NuruConfig::load_from(&path).unwrap();
        assert_eq!(saved.session_token(), Some("abc123"));

        logout(&mut ctx, &mut out).unwrap();
        assert!(!ctx.authenticated());
        let saved = NuruConfig::load_from(&path).unwrap();
        assert_eq!(saved.session_token(), None);
        assert!(String::from_utf8(out).unwrap().contains("[NOTE] Logged out"));
    }

    #[test]
    fn test_empty_token_rejected() {
        let mut ctx = Context::new(Box::new(FakeBackend::new()), NuruConfig::default());
        let mut out = Vec::new();
        assert!(login(&mut ctx, &mut out, "  ").is_err());
        assert!(!ctx.authenticated());
    }
}
