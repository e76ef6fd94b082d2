// ==========================================
// 时刻维度表生成器 - CSV 输出
// ==========================================
// 职责: 将物化后的 ProjectedTable 写出为 CSV
// 红线: 先写同目录临时文件，完整写入后再替换目标文件；
//       任何失败都不留下截断的输出文件
// ==========================================

use csv::{Terminator, WriterBuilder};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

use crate::engine::error::{GenerateError, GenerateResult};
use crate::engine::projector::ProjectedTable;

// ==========================================
// CsvTableWriter
// ==========================================
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvTableWriter;

impl CsvTableWriter {
    pub fn new() -> Self {
        Self
    }

    /// 写出表格（表头 + 每行一条记录，无行号列）
    ///
    /// # 参数
    /// - table: 已完整物化的输出表
    /// - path: 目标文件路径（存在则覆盖）
    pub fn write(&self, table: &ProjectedTable, path: &Path) -> GenerateResult<()> {
        let dir = parent_dir(path);
        fs::create_dir_all(&dir).map_err(|source| GenerateError::Io {
            path: dir.display().to_string(),
            source,
        })?;

        let tmp = NamedTempFile::new_in(&dir).map_err(|source| GenerateError::Io {
            path: dir.display().to_string(),
            source,
        })?;

        {
            let mut wtr = WriterBuilder::new()
                .terminator(Terminator::Any(b'\n'))
                .from_writer(tmp.as_file());

            wtr.write_record(table.header())?;
            for row in &table.rows {
                wtr.write_record(row)?;
            }
            wtr.flush().map_err(|source| GenerateError::Io {
                path: tmp.path().display().to_string(),
                source,
            })?;
        }

        finalize_file(&tmp).map_err(|source| GenerateError::Io {
            path: tmp.path().display().to_string(),
            source,
        })?;

        tmp.persist(path).map_err(|source| GenerateError::Persist {
            path: path.display().to_string(),
            source,
        })?;

        tracing::debug!(path = %path.display(), rows = table.row_count(), "CSV 写出完成");
        Ok(())
    }
}

fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

// 临时文件默认 0600，落盘前放宽为普通文件权限
fn finalize_file(tmp: &NamedTempFile) -> std::io::Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tmp.as_file()
            .set_permissions(fs::Permissions::from_mode(0o644))?;
    }
    tmp.as_file().sync_all()
}
