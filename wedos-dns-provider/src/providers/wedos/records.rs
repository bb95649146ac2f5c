//! Zone row operations
//!
//! The four raw WAPI commands, plus the two DNS-01 operations composed from
//! them. Every zone edit is followed by `dns-domain-commit`; without it the
//! row stays staged and never reaches the name servers.

use crate::error::Result;
use crate::utils::domain::{normalize_domain_name, relative_name};

use super::WedosClient;
use super::types::{
    CommitParams, DomainParams, RowAddParams, RowDeleteParams, RowId, RowsListData, WapiCommand,
    WapiRow,
};

/// Record type of ACME challenge rows.
const TXT: &str = "TXT";

impl WedosClient {
    // ============ Raw commands ============

    /// All rows of `zone`, in provider order. A zone without rows yields an
    /// empty list.
    pub async fn list_rows(&self, zone: &str) -> Result<Vec<WapiRow>> {
        let zone = normalize_domain_name(zone);
        let response = self
            .command(WapiCommand::RowsList, Some(&DomainParams { domain: zone }))
            .await?;

        let rows = response
            .data::<RowsListData>()?
            .and_then(|data| data.row)
            .unwrap_or_default();

        log::debug!("[wedos] {zone}: {} rows", rows.len());
        Ok(rows)
    }

    /// Stage a new row. Nothing is published until [`commit`](Self::commit).
    ///
    /// WAPI does not enforce unique values, so adding the same row twice
    /// creates two rows.
    pub async fn add_row(
        &self,
        zone: &str,
        name: &str,
        record_type: &str,
        ttl: u32,
        rdata: &str,
    ) -> Result<()> {
        let params = RowAddParams {
            domain: normalize_domain_name(zone),
            name,
            record_type,
            ttl,
            rdata,
        };
        self.command(WapiCommand::RowAdd, Some(&params)).await?;
        Ok(())
    }

    /// Stage removal of a row.
    pub async fn delete_row(&self, zone: &str, row_id: &RowId) -> Result<()> {
        let params = RowDeleteParams {
            domain: normalize_domain_name(zone),
            row_id,
        };
        self.command(WapiCommand::RowDelete, Some(&params)).await?;
        Ok(())
    }

    /// Publish staged edits of `zone`.
    pub async fn commit(&self, zone: &str) -> Result<()> {
        let zone = normalize_domain_name(zone);
        let params = CommitParams {
            domain: zone,
            name: zone,
        };
        self.command(WapiCommand::DomainCommit, Some(&params)).await?;
        Ok(())
    }

    /// First row of `zone` whose value is exactly `value`.
    ///
    /// Rows WAPI returns without `ID` or `rdata` are skipped. When several
    /// rows share the value, the first in provider order wins.
    pub async fn find_row_by_value(&self, zone: &str, value: &str) -> Result<Option<WapiRow>> {
        let rows = self.list_rows(zone).await?;
        Ok(first_with_value(&rows, value).map(|(_, row)| row.clone()))
    }

    // ============ DNS-01 ============

    /// Create the TXT row carrying `token` for `fqdn` in `zone` and publish it.
    ///
    /// Not safe to retry blindly: a repeated call creates a duplicate row.
    /// Use [`find_row_by_value`](Self::find_row_by_value) first if that matters.
    pub async fn add_validation_record(&self, fqdn: &str, zone: &str, token: &str) -> Result<()> {
        let name = relative_name(fqdn, zone);
        log::info!("[wedos] adding TXT '{name}' in zone {zone}");

        self.add_row(zone, name, TXT, self.config.ttl, token).await?;
        self.commit(zone).await
    }

    /// Remove the row carrying `token` from `zone` and publish the change.
    ///
    /// A missing row is only worth a warning: the zone already lacks what the
    /// caller wanted gone.
    pub async fn delete_validation_record(
        &self,
        fqdn: &str,
        zone: &str,
        token: &str,
    ) -> Result<()> {
        let rows = self.list_rows(zone).await?;
        let Some((row_id, row)) = first_with_value(&rows, token) else {
            log::warn!(
                "[wedos] TXT record for {fqdn} not found in zone {zone}; verify the zone manually"
            );
            return Ok(());
        };

        log::info!("[wedos] deleting row {row_id} ('{}') in zone {zone}", row.name);
        self.delete_row(zone, row_id).await?;
        self.commit(zone).await
    }
}

fn first_with_value<'a>(rows: &'a [WapiRow], value: &str) -> Option<(&'a RowId, &'a WapiRow)> {
    rows.iter().find_map(|row| match &row.id {
        Some(id) if row.has_value(value) => Some((id, row)),
        _ => None,
    })
}
