use crate::{
    data::guild_settings::GuildSettingsRepository,
    error::AppError,
    model::setting::{CreateGuildSettingsParam, SettingKey},
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use serenity::all::{ChannelId, GuildId, RoleId};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all;
