//! 内置规则表
//! 有序的 (分类值, 规则源文本) 列表，表中顺序即匹配优先级：先声明者先匹配
//! 规则源文本视为可信常量，直接拼接进正则，不做转义

use super::model::{ClientBrowserType, ClientKind, ClientSystemType};

/// 单条规则：分类值 + 规则源文本（空串表示使用分类名称本身）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleEntry<K: ClientKind> {
    pub kind: K,
    pub pattern: &'static str,
}

impl<K: ClientKind> RuleEntry<K> {
    pub const fn new(kind: K, pattern: &'static str) -> Self {
        Self { kind, pattern }
    }

    /// 规则源文本
    pub fn source(&self) -> &'static str {
        if self.pattern.is_empty() {
            self.kind.name()
        } else {
            self.pattern
        }
    }
}

/// 某一分类轴的有序规则表
#[derive(Debug, Clone, Copy)]
pub struct RuleTable<K: ClientKind> {
    entries: &'static [RuleEntry<K>],
}

impl<K: ClientKind> RuleTable<K> {
    pub const fn new(entries: &'static [RuleEntry<K>]) -> Self {
        Self { entries }
    }

    /// 按优先级顺序遍历
    pub fn iter(self) -> impl Iterator<Item = &'static RuleEntry<K>> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 查询分类值对应的规则源文本，缺失时返回调用方给定的默认值
    pub fn description_or(&self, kind: K, fallback: &'static str) -> &'static str {
        self.entries
            .iter()
            .find(|entry| entry.kind == kind)
            .map(RuleEntry::source)
            .unwrap_or(fallback)
    }
}

use ClientBrowserType as B;
use ClientSystemType as S;

/// 系统族规则：爬虫与 Windows 手机（UA 中常带 Android 字样）须先于 Android，
/// iOS 设备（UA 中带 Mac OS X）须先于 Mac，Android 须先于 Linux
static SYSTEM_ENTRIES: [RuleEntry<ClientSystemType>; 14] = [
    RuleEntry::new(
        S::Bot,
        r"Googlebot|bingbot|Baiduspider|YandexBot|Sogou web spider|Bytespider|DuckDuckBot|Slurp|crawler|spider",
    ),
    RuleEntry::new(S::WindowsPhone, r"Windows Phone(?: OS)?"),
    RuleEntry::new(S::WindowsMobile, r"Windows Mobile|Windows CE"),
    RuleEntry::new(S::Android, r"Android"),
    RuleEntry::new(S::IPad, r"iPad"),
    RuleEntry::new(S::IPod, r"iPod"),
    RuleEntry::new(S::IPhone, r"iPhone"),
    RuleEntry::new(S::Symbian, r"SymbianOS|Symbian|Series ?60"),
    RuleEntry::new(S::BlackBerry, r"BlackBerry|BB10|RIM Tablet OS"),
    RuleEntry::new(S::J2ME, r"J2ME|MIDP"),
    RuleEntry::new(S::MTK, r"MTK|MAUI"),
    RuleEntry::new(S::Windows, r"Windows NT|Windows"),
    RuleEntry::new(S::Mac, r"Mac OS X|Macintosh"),
    RuleEntry::new(S::Linux, ""),
];

/// 浏览器族规则：内嵌 WebView 的 App（微信/QQ/UC/百度/搜狗/遨游）须先于其内核浏览器，
/// Edge/Opera 须先于 Chrome，Chrome 须先于 Safari（Chrome UA 同时带 Safari 字样）
static BROWSER_ENTRIES: [RuleEntry<ClientBrowserType>; 13] = [
    RuleEntry::new(
        B::Bot,
        r"Googlebot|bingbot|Baiduspider|YandexBot|Sogou web spider|Bytespider|DuckDuckBot|Slurp",
    ),
    RuleEntry::new(B::WeiXin, r"MicroMessenger"),
    RuleEntry::new(B::QQ, r"MQQBrowser|QQBrowser|QQ/"),
    RuleEntry::new(B::UC, r"UCBrowser|UCWEB"),
    RuleEntry::new(B::Baidu, r"baiduboxapp|BIDUBrowser|baidubrowser"),
    RuleEntry::new(B::Sogou, r"SogouMobileBrowser|SogouMSE|MetaSr"),
    RuleEntry::new(B::Maxthon, ""),
    RuleEntry::new(B::Edge, r"Edge?/|EdgA/|EdgiOS/"),
    RuleEntry::new(B::Opera, r"OPR|Opera"),
    RuleEntry::new(B::IE, r"MSIE|Trident/.*rv:"),
    RuleEntry::new(B::Firefox, r"Firefox|FxiOS"),
    RuleEntry::new(B::Chrome, r"Chrome|CriOS"),
    RuleEntry::new(B::Safari, r"Safari"),
];

pub static SYSTEM_RULES: RuleTable<ClientSystemType> = RuleTable::new(&SYSTEM_ENTRIES);
pub static BROWSER_RULES: RuleTable<ClientBrowserType> = RuleTable::new(&BROWSER_ENTRIES);

/// 分类值到内置规则表的绑定
pub trait BuiltinRules: ClientKind {
    fn builtin_rules() -> RuleTable<Self>;
}

impl BuiltinRules for ClientSystemType {
    fn builtin_rules() -> RuleTable<Self> {
        SYSTEM_RULES
    }
}

impl BuiltinRules for ClientBrowserType {
    fn builtin_rules() -> RuleTable<Self> {
        BROWSER_RULES
    }
}
