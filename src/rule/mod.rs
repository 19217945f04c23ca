//! 规则模块：分类数据模型、有序规则表与识别结果编解码
pub mod model;
pub mod table;
pub mod codec;

// 导出核心接口
pub use self::model::{
    ClientBrowser, ClientBrowserType, ClientKind, ClientSystem, ClientSystemType, UserClient,
    Version,
};
pub use self::table::{BROWSER_RULES, BuiltinRules, RuleEntry, RuleTable, SYSTEM_RULES};
pub use self::codec::{ENCODED_LEN, MOBILE_SYSTEMS, is_mobile_device};
