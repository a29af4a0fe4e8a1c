//! Cascading region → city selection used by the point forms.
//!
//! Choosing a region always clears the chosen city and the offered city
//! list before the new list arrives. A city list fetched for a region that
//! is no longer selected is dropped, so an older in-flight lookup can never
//! overwrite a newer one.

/// City lookup the caller should issue after a region change
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubRegionRequest {
    pub region: String,
}

#[allow(dead_code)]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionSelection {
    region: Option<String>,
    sub_region: Option<String>,
    sub_regions: Vec<String>,
}

#[allow(dead_code)]
impl RegionSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    pub fn sub_region(&self) -> Option<&str> {
        self.sub_region.as_deref()
    }

    /// Cities offered for the current region (empty until they arrive)
    pub fn sub_regions(&self) -> &[String] {
        &self.sub_regions
    }

    /// Select a region. Resets the city and returns the lookup to run.
    pub fn select_region(&mut self, region: impl Into<String>) -> SubRegionRequest {
        let region = region.into();
        self.region = Some(region.clone());
        self.sub_region = None;
        self.sub_regions.clear();
        SubRegionRequest { region }
    }

    /// Back to "no region selected"
    pub fn clear_region(&mut self) {
        self.region = None;
        self.sub_region = None;
        self.sub_regions.clear();
    }

    /// Install a fetched city list. Returns false if it belongs to a region
    /// that is no longer selected.
    pub fn apply_sub_regions(&mut self, region: &str, names: Vec<String>) -> bool {
        if self.region.as_deref() != Some(region) {
            return false;
        }
        self.sub_regions = names;
        true
    }

    /// Select a city. Only cities offered for the current region are accepted.
    pub fn select_sub_region(&mut self, name: &str) -> bool {
        if !self.sub_regions.iter().any(|c| c == name) {
            return false;
        }
        self.sub_region = Some(name.to_string());
        true
    }

    /// `(uf, city)` once both are chosen, as used by the point search
    pub fn search_params(&self) -> Option<(&str, &str)> {
        Some((self.region.as_deref()?, self.sub_region.as_deref()?))
    }
}
