//! Company detail use-case.
//!
//! # Responsibility
//! - Resolve one company by slug.
//! - Resolve its comma-separated founder names into founder profiles.
//!
//! # Invariants
//! - Founder lookups run concurrently, at most `MAX_PARALLEL_LOOKUPS` at a
//!   time, and are all joined before returning.
//! - A founder that is missing or fails to load is omitted; it never fails
//!   the whole page.
//! - Founder order follows the order of names on the company record.

use crate::error::LookbookResult;
use crate::model::entity::{Company, Founder};
use crate::normalize::slugify;
use crate::repo::entity_repo::EntityRepository;
use log::{debug, warn};
use std::thread;

pub const COMPANY_NOT_FOUND: &str = "Company not found";
/// Upper bound on founder lookups in flight for one company.
pub const MAX_PARALLEL_LOOKUPS: usize = 8;

/// Company page model: the company plus every founder that resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyDetail {
    pub company: Company,
    pub founders: Vec<Founder>,
}

pub struct CompanyDetailService<C, F> {
    companies: C,
    founders: F,
}

impl<C, F> CompanyDetailService<C, F>
where
    C: EntityRepository<Entity = Company>,
    F: EntityRepository<Entity = Founder>,
{
    pub fn new(companies: C, founders: F) -> Self {
        Self {
            companies,
            founders,
        }
    }

    /// Loads the company for `slug` and its founders.
    ///
    /// Returns `Ok(None)` when no company has that slug.
    pub fn load(&self, slug: &str) -> LookbookResult<Option<CompanyDetail>> {
        let Some(company) = self.companies.fetch_by_slug(slug)? else {
            debug!("event=company_lookup module=service status=not_found slug={slug}");
            return Ok(None);
        };
        let founders = self.resolve_founders(&company.founder_names());
        Ok(Some(CompanyDetail { company, founders }))
    }

    /// Looks every name up concurrently and keeps the hits in name order.
    pub fn resolve_founders(&self, names: &[String]) -> Vec<Founder> {
        names
            .chunks(MAX_PARALLEL_LOOKUPS)
            .flat_map(|batch| self.resolve_batch(batch))
            .collect()
    }

    fn resolve_batch(&self, names: &[String]) -> Vec<Founder> {
        let founders = &self.founders;
        let results: Vec<Option<Founder>> = thread::scope(|scope| {
            let handles: Vec<_> = names
                .iter()
                .map(|name| {
                    let founder_slug = slugify(name);
                    scope.spawn(move || founders.fetch_by_slug(&founder_slug))
                })
                .collect();

            handles
                .into_iter()
                .zip(names)
                .map(|(handle, name)| match handle.join() {
                    Ok(Ok(found)) => {
                        if found.is_none() {
                            debug!(
                                "event=founder_lookup module=service status=not_found name_len={}",
                                name.len()
                            );
                        }
                        found
                    }
                    Ok(Err(err)) => {
                        warn!(
                            "event=founder_lookup module=service status=error http_status={} configuration={}",
                            err.status().map_or_else(|| "none".to_string(), |s| s.to_string()),
                            err.is_configuration()
                        );
                        None
                    }
                    Err(_) => {
                        warn!("event=founder_lookup module=service status=error kind=panicked");
                        None
                    }
                })
                .collect()
        });
        results.into_iter().flatten().collect()
    }
}
