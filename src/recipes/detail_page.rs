//! Wraps the project detail page in `AppLayout` and upgrades its loading
//! state to a centered spinner.
//!
//! Four guarded edits: the import line, the loading-state block, the opening
//! of the main return, and its closing tags. The search blocks below are
//! byte-exact copies of the page as generated; if the page drifts, the
//! matching step warns and is skipped.

use crate::patch::PatchStep;
use crate::recipe::{Recipe, Step};

pub const DETAIL_PAGE: &str = "src/app/projects/[id]/page.tsx";

const NAV_IMPORT: &str = "import { useParams, useRouter } from 'next/navigation'";
const LAYOUT_IMPORT: &str = "import { AppLayout } from '@/components/app-layout'";
const LAYOUT_IMPORT_MARKER: &str = "import { AppLayout }";

const OLD_LOADING: &str = r##"  if (!project) return (
    <div className="p-6">
      {error ? (
        <div className="rounded border border-red-200 bg-red-50 text-red-700 p-3">
          <div className="font-medium mb-1">Couldn't load project</div>
          <div className="text-sm">{error}</div>
        </div>
      ) : (
        <div>Loading…</div>
      )}
    </div>
  )"##;

const NEW_LOADING: &str = r##"  if (!project) return (
    <AppLayout>
      <div className="p-6">
        {error ? (
          <div className="rounded border border-red-200 bg-red-50 text-red-700 p-3">
            <div className="font-medium mb-1">Couldn't load project</div>
            <div className="text-sm">{error}</div>
          </div>
        ) : (
          <div className="flex items-center justify-center min-h-[60vh]">
            <div className="text-center space-y-3">
              <div className="inline-block animate-spin rounded-full h-10 w-10 border-b-2 border-blue-600"></div>
              <div className="text-gray-600">Loading project details...</div>
            </div>
          </div>
        )}
      </div>
    </AppLayout>
  )"##;

const OLD_RETURN: &str = r##"  return (
    <Boundary>
    <div className="max-w-7xl mx-auto p-6 space-y-6">"##;

const NEW_RETURN: &str = r##"  return (
    <AppLayout>
      <Boundary>
        <div className="max-w-7xl mx-auto p-6 space-y-6">"##;

const OLD_CLOSE: &str = r##"    </div>
    </Boundary>
  )
}"##;

const NEW_CLOSE: &str = r##"        </div>
      </Boundary>
    </AppLayout>
  )
}"##;

pub fn fix_detail() -> Recipe {
    Recipe {
        name: "fix-detail",
        file: DETAIL_PAGE,
        steps: vec![
            Step {
                label: "AppLayout import",
                edit: PatchStep::InsertAfter {
                    anchor: NAV_IMPORT.into(),
                    text: LAYOUT_IMPORT.into(),
                    marker: LAYOUT_IMPORT_MARKER.into(),
                },
            },
            Step {
                label: "loading state",
                edit: PatchStep::Replace {
                    search: OLD_LOADING.into(),
                    replace: NEW_LOADING.into(),
                },
            },
            Step {
                label: "main return open",
                edit: PatchStep::Replace {
                    search: OLD_RETURN.into(),
                    replace: NEW_RETURN.into(),
                },
            },
            Step {
                label: "main return close",
                edit: PatchStep::Replace {
                    search: OLD_CLOSE.into(),
                    replace: NEW_CLOSE.into(),
                },
            },
        ],
    }
}
