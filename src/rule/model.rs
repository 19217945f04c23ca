//! 识别结果数据模型定义
//! 系统/浏览器分类枚举、版本号与最终识别结果，支持序列化/反序列化

use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{UaClientError, UaResult};

/// 分类枚举的公共能力（系统族 / 浏览器族）
pub trait ClientKind: Copy + Eq + Hash + fmt::Debug + Send + Sync + 'static {
    /// 哨兵值，未命中任何规则时的默认值
    const UNKNOWN: Self;
    /// 全部成员（声明顺序）
    const ALL: &'static [Self];
    /// 分类轴名称，用于日志
    const CATEGORY: &'static str;

    fn id(self) -> i32;
    fn name(self) -> &'static str;

    fn from_id(id: i32) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.id() == id)
    }

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
    }

    fn is_unknown(self) -> bool {
        self == Self::UNKNOWN
    }
}

macro_rules! client_kind {
    (
        $(#[$meta:meta])*
        pub enum $ty:ident : $category:literal {
            $( $variant:ident = $id:literal => $name:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
        #[repr(i32)]
        pub enum $ty {
            #[default]
            $(
                #[serde(rename = $name)]
                $variant = $id,
            )+
        }

        impl ClientKind for $ty {
            const UNKNOWN: Self = $ty::Unknown;
            const ALL: &'static [Self] = &[$($ty::$variant),+];
            const CATEGORY: &'static str = $category;

            fn id(self) -> i32 {
                self as i32
            }

            fn name(self) -> &'static str {
                match self {
                    $($ty::$variant => $name,)+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }

        impl FromStr for $ty {
            type Err = UaClientError;

            fn from_str(s: &str) -> UaResult<Self> {
                <$ty as ClientKind>::from_name(s.trim()).ok_or_else(|| {
                    UaClientError::InvalidInput(format!("未知{}类型：{}", $category, s))
                })
            }
        }
    };
}

client_kind! {
    /// 操作系统族
    pub enum ClientSystemType: "system" {
        Unknown = 0 => "Unknown",
        Bot = 1 => "Bot",
        WindowsPhone = 2 => "WindowsPhone",
        WindowsMobile = 3 => "WindowsMobile",
        Android = 4 => "Android",
        IPad = 5 => "iPad",
        IPod = 6 => "iPod",
        IPhone = 7 => "iPhone",
        Symbian = 8 => "Symbian",
        BlackBerry = 9 => "BlackBerry",
        J2ME = 10 => "J2ME",
        MTK = 11 => "MTK",
        Windows = 12 => "Windows",
        Mac = 13 => "Mac",
        Linux = 14 => "Linux",
    }
}

client_kind! {
    /// 浏览器族
    pub enum ClientBrowserType: "browser" {
        Unknown = 0 => "Unknown",
        Bot = 1 => "Bot",
        WeiXin = 2 => "WeiXin",
        QQ = 3 => "QQ",
        UC = 4 => "UC",
        Baidu = 5 => "Baidu",
        Sogou = 6 => "Sogou",
        Maxthon = 7 => "Maxthon",
        Edge = 8 => "Edge",
        Opera = 9 => "Opera",
        IE = 10 => "IE",
        Firefox = 11 => "Firefox",
        Chrome = 12 => "Chrome",
        Safari = 13 => "Safari",
    }
}

/// 四段式版本号，各段恒为非负
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "VersionRepr")]
pub struct Version {
    major: i32,
    minor: i32,
    build: i32,
    revision: i32,
}

// 反序列化中间形态，经 Version::new 钳制负数
#[derive(Deserialize)]
struct VersionRepr {
    #[serde(default)]
    major: i32,
    #[serde(default)]
    minor: i32,
    #[serde(default)]
    build: i32,
    #[serde(default)]
    revision: i32,
}

impl From<VersionRepr> for Version {
    fn from(repr: VersionRepr) -> Self {
        Version::new(repr.major, repr.minor, repr.build, repr.revision)
    }
}

impl Version {
    pub const ZERO: Version = Version {
        major: 0,
        minor: 0,
        build: 0,
        revision: 0,
    };

    /// 负数分段钳制为 0
    pub fn new(major: i32, minor: i32, build: i32, revision: i32) -> Self {
        Self {
            major: major.max(0),
            minor: minor.max(0),
            build: build.max(0),
            revision: revision.max(0),
        }
    }

    pub fn major(&self) -> i32 {
        self.major
    }

    pub fn minor(&self) -> i32 {
        self.minor
    }

    pub fn build(&self) -> i32 {
        self.build
    }

    pub fn revision(&self) -> i32 {
        self.revision
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    pub fn to_array(&self) -> [i32; 4] {
        [self.major, self.minor, self.build, self.revision]
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}",
            self.major, self.minor, self.build, self.revision
        )
    }
}

/// 操作系统识别结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ClientSystem {
    #[serde(rename = "type")]
    pub kind: ClientSystemType,
    pub version: Version,
}

impl ClientSystem {
    pub fn new(kind: ClientSystemType, version: Version) -> Self {
        Self { kind, version }
    }

    /// 是否为移动设备系统
    pub fn is_mobile_device(&self) -> bool {
        super::codec::is_mobile_device(self)
    }
}

/// 浏览器识别结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ClientBrowser {
    #[serde(rename = "type")]
    pub kind: ClientBrowserType,
    pub version: Version,
}

impl ClientBrowser {
    pub fn new(kind: ClientBrowserType, version: Version) -> Self {
        Self { kind, version }
    }
}

/// 单个 User-Agent 的完整识别结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct UserClient {
    pub system: ClientSystem,
    pub browser: ClientBrowser,
}

impl UserClient {
    pub fn new(system: ClientSystem, browser: ClientBrowser) -> Self {
        Self { system, browser }
    }

    /// Unknown/Unknown，版本全 0
    pub fn unknown() -> Self {
        Self::default()
    }

    pub fn is_unknown(&self) -> bool {
        self.system.kind.is_unknown() && self.browser.kind.is_unknown()
    }
}

// ======== 组合字符串：<System>-<Version>/<Browser>-<Version> ========
impl fmt::Display for UserClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}/{}-{}",
            self.system.kind, self.system.version, self.browser.kind, self.browser.version
        )
    }
}

impl FromStr for UserClient {
    type Err = UaClientError;

    fn from_str(s: &str) -> UaResult<Self> {
        let (system_part, browser_part) = s
            .split_once('/')
            .ok_or_else(|| UaClientError::InvalidInput(format!("缺少分隔符 '/'：{}", s)))?;

        let (system_kind, system_version) = split_kind_version(system_part)?;
        let (browser_kind, browser_version) = split_kind_version(browser_part)?;

        Ok(Self {
            system: ClientSystem::new(system_kind.parse()?, Version::parse(system_version)),
            browser: ClientBrowser::new(browser_kind.parse()?, Version::parse(browser_version)),
        })
    }
}

fn split_kind_version(part: &str) -> UaResult<(&str, &str)> {
    part.split_once('-')
        .ok_or_else(|| UaClientError::InvalidInput(format!("缺少分隔符 '-'：{}", part)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_ids_are_stable() {
        assert_eq!(ClientSystemType::Unknown.id(), 0);
        assert_eq!(ClientSystemType::IPhone.id(), 7);
        assert_eq!(ClientBrowserType::Unknown.id(), 0);
        assert_eq!(ClientBrowserType::WeiXin.id(), 2);

        for kind in ClientSystemType::ALL {
            assert_eq!(ClientSystemType::from_id(kind.id()), Some(*kind));
        }
        for kind in ClientBrowserType::ALL {
            assert_eq!(ClientBrowserType::from_id(kind.id()), Some(*kind));
        }
        assert_eq!(ClientSystemType::from_id(99), None);
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(ClientSystemType::IPhone.to_string(), "iPhone");
        assert_eq!("iphone".parse::<ClientSystemType>().unwrap(), ClientSystemType::IPhone);
        assert!("Plan9".parse::<ClientSystemType>().is_err());
    }

    #[test]
    fn test_version_clamps_negative() {
        let v = Version::new(-1, 2, -3, 4);
        assert_eq!(v.to_array(), [0, 2, 0, 4]);
    }

    #[test]
    fn test_deserialize_clamps_negative_version() {
        let json = r#"{"system":{"type":"iPhone","version":{"major":-5,"minor":3,"build":0,"revision":-1}},"browser":{"type":"Chrome","version":{"major":91}}}"#;
        let client: UserClient = serde_json::from_str(json).unwrap();

        assert_eq!(client.system.kind, ClientSystemType::IPhone);
        assert_eq!(client.system.version.to_array(), [0, 3, 0, 0]);
        assert_eq!(client.browser.version, Version::new(91, 0, 0, 0));
        assert_eq!(UserClient::decode(&client.encode()), Some(client));
    }

    #[test]
    fn test_composite_string_round_trip() {
        let client = UserClient::new(
            ClientSystem::new(ClientSystemType::IPhone, Version::new(14, 4, 0, 0)),
            ClientBrowser::new(ClientBrowserType::WeiXin, Version::new(7, 0, 0, 0)),
        );
        let text = client.to_string();
        assert_eq!(text, "iPhone-14.4.0.0/WeiXin-7.0.0.0");
        assert_eq!(text.parse::<UserClient>().unwrap(), client);
    }

    #[test]
    fn test_composite_string_rejects_garbage() {
        assert!("iPhone".parse::<UserClient>().is_err());
        assert!("iPhone-1/Chrome".parse::<UserClient>().is_err());
        assert!("Amiga-1/Chrome-2".parse::<UserClient>().is_err());
    }

    #[test]
    fn test_unknown_default() {
        let client = UserClient::unknown();
        assert!(client.is_unknown());
        assert_eq!(client.to_string(), "Unknown-0.0.0.0/Unknown-0.0.0.0");
    }
}
