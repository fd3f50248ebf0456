//! Built-in Tailwind conflict groups.
//!
//! Each entry is `(group, prefixes)` in [`GroupMerge`] form: a prefix ending
//! in `-` claims every utility starting with it (and the bare name without
//! the dash), any other prefix names one whole utility. The longest match
//! wins, so `text-lg` lands in `font-size` and `text-red-500` in
//! `text-color`.
//!
//! [`GroupMerge`]: crate::GroupMerge

pub(crate) static TAILWIND_GROUPS: &[(&str, &[&str])] = &[
    // Layout
    (
        "display",
        &[
            "block", "inline-block", "inline", "flex", "inline-flex", "grid", "inline-grid",
            "table", "inline-table", "table-row", "table-cell", "flow-root", "contents",
            "list-item", "hidden",
        ],
    ),
    ("position", &["static", "fixed", "absolute", "relative", "sticky"]),
    ("visibility", &["visible", "invisible", "collapse"]),
    ("overflow", &["overflow-"]),
    ("overflow-x", &["overflow-x-"]),
    ("overflow-y", &["overflow-y-"]),
    ("inset", &["inset-"]),
    ("inset-x", &["inset-x-"]),
    ("inset-y", &["inset-y-"]),
    ("top", &["top-"]),
    ("right", &["right-"]),
    ("bottom", &["bottom-"]),
    ("left", &["left-"]),
    ("z-index", &["z-"]),
    ("aspect-ratio", &["aspect-"]),
    (
        "object-fit",
        &["object-contain", "object-cover", "object-fill", "object-none", "object-scale-down"],
    ),
    // Flexbox and grid
    ("flex", &["flex-1", "flex-auto", "flex-initial", "flex-none"]),
    (
        "flex-direction",
        &["flex-row", "flex-row-reverse", "flex-col", "flex-col-reverse"],
    ),
    ("flex-wrap", &["flex-wrap", "flex-wrap-reverse", "flex-nowrap"]),
    ("flex-grow", &["grow-"]),
    ("flex-shrink", &["shrink-"]),
    ("flex-basis", &["basis-"]),
    ("order", &["order-"]),
    ("grid-cols", &["grid-cols-"]),
    ("grid-rows", &["grid-rows-"]),
    ("col-span", &["col-span-"]),
    ("row-span", &["row-span-"]),
    ("gap", &["gap-"]),
    ("gap-x", &["gap-x-"]),
    ("gap-y", &["gap-y-"]),
    ("justify-content", &["justify-"]),
    ("justify-items", &["justify-items-"]),
    ("justify-self", &["justify-self-"]),
    ("align-items", &["items-"]),
    ("align-self", &["self-"]),
    // Spacing
    ("padding", &["p-"]),
    ("padding-x", &["px-"]),
    ("padding-y", &["py-"]),
    ("padding-top", &["pt-"]),
    ("padding-right", &["pr-"]),
    ("padding-bottom", &["pb-"]),
    ("padding-left", &["pl-"]),
    ("padding-start", &["ps-"]),
    ("padding-end", &["pe-"]),
    ("margin", &["m-"]),
    ("margin-x", &["mx-"]),
    ("margin-y", &["my-"]),
    ("margin-top", &["mt-"]),
    ("margin-right", &["mr-"]),
    ("margin-bottom", &["mb-"]),
    ("margin-left", &["ml-"]),
    ("margin-start", &["ms-"]),
    ("margin-end", &["me-"]),
    ("space-x", &["space-x-"]),
    ("space-y", &["space-y-"]),
    // Sizing
    ("width", &["w-"]),
    ("min-width", &["min-w-"]),
    ("max-width", &["max-w-"]),
    ("height", &["h-"]),
    ("min-height", &["min-h-"]),
    ("max-height", &["max-h-"]),
    ("size", &["size-"]),
    // Typography
    (
        "font-size",
        &[
            "text-xs", "text-sm", "text-base", "text-lg", "text-xl", "text-2xl", "text-3xl",
            "text-4xl", "text-5xl", "text-6xl", "text-7xl", "text-8xl", "text-9xl",
        ],
    ),
    (
        "font-weight",
        &[
            "font-thin", "font-extralight", "font-light", "font-normal", "font-medium",
            "font-semibold", "font-bold", "font-extrabold", "font-black",
        ],
    ),
    ("font-family", &["font-sans", "font-serif", "font-mono"]),
    ("font-style", &["italic", "not-italic"]),
    (
        "text-align",
        &["text-left", "text-center", "text-right", "text-justify", "text-start", "text-end"],
    ),
    ("text-overflow", &["text-ellipsis", "text-clip"]),
    ("text-wrap", &["text-wrap", "text-nowrap", "text-balance", "text-pretty"]),
    ("text-color", &["text-"]),
    (
        "text-transform",
        &["uppercase", "lowercase", "capitalize", "normal-case"],
    ),
    (
        "text-decoration",
        &["underline", "overline", "line-through", "no-underline"],
    ),
    ("line-height", &["leading-"]),
    ("letter-spacing", &["tracking-"]),
    ("whitespace", &["whitespace-"]),
    // Backgrounds
    ("bg-color", &["bg-"]),
    ("bg-size", &["bg-auto", "bg-cover", "bg-contain"]),
    (
        "bg-position",
        &[
            "bg-center", "bg-top", "bg-bottom", "bg-left", "bg-right", "bg-left-top",
            "bg-left-bottom", "bg-right-top", "bg-right-bottom",
        ],
    ),
    (
        "bg-repeat",
        &["bg-repeat", "bg-no-repeat", "bg-repeat-x", "bg-repeat-y", "bg-repeat-round", "bg-repeat-space"],
    ),
    ("bg-attachment", &["bg-fixed", "bg-local", "bg-scroll"]),
    ("bg-image", &["bg-none", "bg-gradient-to-", "bg-linear-"]),
    ("bg-clip", &["bg-clip-"]),
    ("gradient-from", &["from-"]),
    ("gradient-via", &["via-"]),
    ("gradient-to", &["to-"]),
    // Borders
    ("rounded", &["rounded-"]),
    ("rounded-t", &["rounded-t-"]),
    ("rounded-r", &["rounded-r-"]),
    ("rounded-b", &["rounded-b-"]),
    ("rounded-l", &["rounded-l-"]),
    (
        "border-width",
        &["border", "border-0", "border-2", "border-4", "border-8"],
    ),
    ("border-width-x", &["border-x", "border-x-0", "border-x-2", "border-x-4", "border-x-8"]),
    ("border-width-y", &["border-y", "border-y-0", "border-y-2", "border-y-4", "border-y-8"]),
    ("border-width-t", &["border-t", "border-t-0", "border-t-2", "border-t-4", "border-t-8"]),
    ("border-width-r", &["border-r", "border-r-0", "border-r-2", "border-r-4", "border-r-8"]),
    ("border-width-b", &["border-b", "border-b-0", "border-b-2", "border-b-4", "border-b-8"]),
    ("border-width-l", &["border-l", "border-l-0", "border-l-2", "border-l-4", "border-l-8"]),
    (
        "border-style",
        &["border-solid", "border-dashed", "border-dotted", "border-double", "border-hidden", "border-none"],
    ),
    ("border-collapse", &["border-collapse", "border-separate"]),
    ("border-color", &["border-"]),
    (
        "ring-width",
        &["ring", "ring-0", "ring-1", "ring-2", "ring-4", "ring-8"],
    ),
    ("ring-inset", &["ring-inset"]),
    ("ring-color", &["ring-"]),
    ("ring-offset", &["ring-offset-"]),
    // Effects
    (
        "shadow",
        &["shadow", "shadow-sm", "shadow-md", "shadow-lg", "shadow-xl", "shadow-2xl", "shadow-inner", "shadow-none"],
    ),
    ("shadow-color", &["shadow-"]),
    ("opacity", &["opacity-"]),
    // Transitions and transforms
    ("transition", &["transition-"]),
    ("duration", &["duration-"]),
    ("ease", &["ease-"]),
    ("delay", &["delay-"]),
    ("scale", &["scale-"]),
    ("scale-x", &["scale-x-"]),
    ("scale-y", &["scale-y-"]),
    ("rotate", &["rotate-"]),
    ("translate-x", &["translate-x-"]),
    ("translate-y", &["translate-y-"]),
    // Interactivity
    ("cursor", &["cursor-"]),
    ("pointer-events", &["pointer-events-"]),
    ("user-select", &["select-"]),
    // SVG
    ("fill", &["fill-"]),
];
