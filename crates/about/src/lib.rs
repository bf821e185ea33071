//! ビルド時に埋め込まれたメタデータを保持するライブラリ。
//!
//! 値はすべて呼び出し側（バイナリクレートのビルドスクリプト）が注入する。
//! このクレート自体は環境変数や git を一切参照しない。

use std::fmt;

use serde::Serialize;

/// プレリリース版を示すマーカー文字列（大文字小文字を区別する部分一致）。
const SNAPSHOT_MARKER: &str = "SNAPSHOT";

/// ビルド時に確定する 4 つのメタデータ文字列。
///
/// 構築後は不変で、全アクセサは副作用なしに格納値をそのまま返す。
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildInfo {
    artifact_id: &'static str,
    build_timestamp: &'static str,
    commit: &'static str,
    version: &'static str,
}

impl BuildInfo {
    /// 4 つの文字列をそのまま保持する `BuildInfo` を構築する。
    pub const fn new(
        artifact_id: &'static str,
        build_timestamp: &'static str,
        commit: &'static str,
        version: &'static str,
    ) -> Self {
        Self {
            artifact_id,
            build_timestamp,
            commit,
            version,
        }
    }

    /// パッケージされたツールの名前を返す。
    pub const fn artifact_id(&self) -> &'static str {
        self.artifact_id
    }

    /// ビルド時刻の文字列を返す。形式の解釈は行わない。
    pub const fn build_timestamp(&self) -> &'static str {
        self.build_timestamp
    }

    /// ビルド時点のコミット識別子を返す。
    ///
    /// git が参照できないビルドではプレースホルダ文字列のまま返る。
    pub const fn commit(&self) -> &'static str {
        self.commit
    }

    /// セマンティックバージョン文字列を返す。
    pub const fn version(&self) -> &'static str {
        self.version
    }

    /// バージョン文字列が `SNAPSHOT` を含む場合に true を返す。
    pub fn is_snapshot(&self) -> bool {
        self.version.contains(SNAPSHOT_MARKER)
    }

    /// 起動ログ向けの 1 行サマリを返す。
    pub fn summary(&self) -> String {
        format!(
            "{} {} ({}, built {})",
            self.artifact_id, self.version, self.commit, self.build_timestamp
        )
    }
}

impl fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.artifact_id, self.version)?;
        writeln!(f, "commit: {}", self.commit)?;
        writeln!(f, "built: {}", self.build_timestamp)?;
        write!(f, "snapshot: {}", self.is_snapshot())
    }
}
