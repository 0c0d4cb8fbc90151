//! Localized Messages
//!
//! Static message catalog keyed by the backend's message ids.

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en", alias = "en-US")]
    En,
    #[serde(rename = "zh-CN", alias = "zh")]
    ZhCn,
}

impl Locale {
    pub fn toggled(self) -> Self {
        match self {
            Locale::En => Locale::ZhCn,
            Locale::ZhCn => Locale::En,
        }
    }

    /// Label of the switch button (names the other locale)
    pub fn switch_label(self) -> &'static str {
        match self {
            Locale::En => "中文",
            Locale::ZhCn => "English",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Msg {
    RecycleName,
    Preview,
    TitleName,
    ModuleName,
    Thumb,
    Action,
    ActionRecover,
    ActionDelete,
    BatchRecover,
    BatchDelete,
    CancelSelect,
    Selected,
    DeleteConfirm,
    DeleteDeleting,
    DeleteSuccess,
    DeleteFailure,
    RecoverConfirm,
    RecoverRecovering,
    RecoverSuccess,
    RecoverFailure,
    ListFailure,
    Ok,
    Cancel,
    Loading,
    Empty,
    Total,
    PerPage,
    GoTo,
    Columns,
    Reset,
}

impl Msg {
    /// Backend message id
    pub fn id(self) -> &'static str {
        match self {
            Msg::RecycleName => "content.recycle.name",
            Msg::Preview => "content.preview",
            Msg::TitleName => "content.title.name",
            Msg::ModuleName => "content.module.name",
            Msg::Thumb => "content.thumb.name",
            Msg::Action => "setting.action",
            Msg::ActionRecover => "content.action.recover",
            Msg::ActionDelete => "setting.system.delete",
            Msg::BatchRecover => "content.option.batch-recover",
            Msg::BatchDelete => "content.option.batch-delete",
            Msg::CancelSelect => "content.option.cancel-select",
            Msg::Selected => "content.option.selected",
            Msg::DeleteConfirm => "content.delete.confirm",
            Msg::DeleteDeleting => "content.delete.deleting",
            Msg::DeleteSuccess => "content.delete.success",
            Msg::DeleteFailure => "content.delete.failure",
            Msg::RecoverConfirm => "content.recover.confirm",
            Msg::RecoverRecovering => "content.recover.recovering",
            Msg::RecoverSuccess => "content.recover.success",
            Msg::RecoverFailure => "content.recover.failure",
            Msg::ListFailure => "content.list.failure",
            Msg::Ok => "common.ok",
            Msg::Cancel => "common.cancel",
            Msg::Loading => "common.loading",
            Msg::Empty => "common.empty",
            Msg::Total => "common.total",
            Msg::PerPage => "common.per-page",
            Msg::GoTo => "common.goto",
            Msg::Columns => "common.columns",
            Msg::Reset => "common.reset",
        }
    }
}

/// Translate `msg` into `locale`
pub fn t(locale: Locale, msg: Msg) -> &'static str {
    match locale {
        Locale::En => en(msg),
        Locale::ZhCn => zh_cn(msg),
    }
}

fn en(msg: Msg) -> &'static str {
    match msg {
        Msg::RecycleName => "Recycle Bin",
        Msg::Preview => "Preview",
        Msg::TitleName => "Title",
        Msg::ModuleName => "Module",
        Msg::Thumb => "Thumbnail",
        Msg::Action => "Action",
        Msg::ActionRecover => "Recover",
        Msg::ActionDelete => "Delete",
        Msg::BatchRecover => "Recover selected",
        Msg::BatchDelete => "Delete selected",
        Msg::CancelSelect => "Clear selection",
        Msg::Selected => "selected",
        Msg::DeleteConfirm => "Permanently delete the selected archives? This cannot be undone.",
        Msg::DeleteDeleting => "Deleting...",
        Msg::DeleteSuccess => "Deleted",
        Msg::DeleteFailure => "Delete failed, please try again",
        Msg::RecoverConfirm => "Recover the selected archives?",
        Msg::RecoverRecovering => "Recovering...",
        Msg::RecoverSuccess => "Recovered",
        Msg::RecoverFailure => "Recover failed, please try again",
        Msg::ListFailure => "Failed to load the recycle bin",
        Msg::Ok => "OK",
        Msg::Cancel => "Cancel",
        Msg::Loading => "Loading...",
        Msg::Empty => "No archives in the recycle bin",
        Msg::Total => "Total",
        Msg::PerPage => "/ page",
        Msg::GoTo => "Go to",
        Msg::Columns => "Columns",
        Msg::Reset => "Reset",
    }
}

fn zh_cn(msg: Msg) -> &'static str {
    match msg {
        Msg::RecycleName => "回收站",
        Msg::Preview => "预览",
        Msg::TitleName => "标题",
        Msg::ModuleName => "模型",
        Msg::Thumb => "缩略图",
        Msg::Action => "操作",
        Msg::ActionRecover => "恢复",
        Msg::ActionDelete => "删除",
        Msg::BatchRecover => "批量恢复",
        Msg::BatchDelete => "批量删除",
        Msg::CancelSelect => "取消选择",
        Msg::Selected => "项已选择",
        Msg::DeleteConfirm => "确定要彻底删除选中的文档吗？删除后无法恢复。",
        Msg::DeleteDeleting => "正在删除",
        Msg::DeleteSuccess => "删除成功",
        Msg::DeleteFailure => "删除失败，请重试",
        Msg::RecoverConfirm => "确定要恢复选中的文档吗？",
        Msg::RecoverRecovering => "正在恢复",
        Msg::RecoverSuccess => "恢复成功",
        Msg::RecoverFailure => "恢复失败，请重试",
        Msg::ListFailure => "回收站加载失败",
        Msg::Ok => "确定",
        Msg::Cancel => "取消",
        Msg::Loading => "加载中...",
        Msg::Empty => "回收站为空",
        Msg::Total => "共",
        Msg::PerPage => "条/页",
        Msg::GoTo => "跳至",
        Msg::Columns => "列设置",
        Msg::Reset => "重置",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_deserialize() {
        let zh: Locale = serde_json::from_str(r#""zh""#).unwrap();
        let en: Locale = serde_json::from_str(r#""en-US""#).unwrap();
        assert_eq!(zh, Locale::ZhCn);
        assert_eq!(en, Locale::En);
        assert_eq!(Locale::En.toggled(), Locale::ZhCn);
    }

    #[test]
    fn test_translations() {
        assert_eq!(t(Locale::En, Msg::RecoverSuccess), "Recovered");
        assert_eq!(t(Locale::ZhCn, Msg::DeleteSuccess), "删除成功");
        assert_eq!(Msg::DeleteDeleting.id(), "content.delete.deleting");
    }
}
