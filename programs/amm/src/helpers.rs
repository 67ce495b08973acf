use anchor_lang::prelude::*;

use crate::{error::ErrorCode, state::Config};

pub fn require_admin(admin: &Signer<'_>, config: &Account<Config>) -> Result<()> {
    let authority = config
        .authority
        .ok_or_else(|| error!(ErrorCode::Unauthorized))?;
    require_keys_eq!(admin.key(), authority, ErrorCode::Unauthorized);
    Ok(())
}
